//! Core handler functions for unified business logic.
//!
//! This module provides a single interface the HTTP layer (and any future
//! interface) calls into. Each handler encapsulates one complete operation:
//! validation where required, filter construction for list queries, and
//! delegation to the [`Registry`]. Keeping this layer free of framework
//! types means the same functions back every interface identically.

use crate::{
    models::{Planet, PlanetFilter},
    params::{CreatePlanet, Id, ListPlanets, Name},
    Registry, Result,
};

/// Handle registering a new planet.
///
/// Validates the creation parameters before they reach the persistence
/// layer, then returns the created record (including the assigned id) for
/// confirmation.
///
/// # Errors
///
/// * `RegistryError::InvalidInput` - When a required field is empty
/// * `RegistryError::DuplicateName` - When the name is already registered
pub async fn handle_create_planet(registry: &Registry, params: &CreatePlanet) -> Result<Planet> {
    params.validate()?;
    registry.create_planet(params).await
}

/// Handle retrieving a planet by ID.
///
/// Returns `None` when no planet has the given id; absence is not an
/// error at this layer.
pub async fn handle_get_planet(registry: &Registry, params: &Id) -> Result<Option<Planet>> {
    registry.get_planet(params).await
}

/// Handle retrieving a planet by its exact name.
pub async fn handle_get_planet_by_name(
    registry: &Registry,
    params: &Name,
) -> Result<Option<Planet>> {
    registry.get_planet_by_name(params).await
}

/// Handle listing planets with optional climate/terrain filtering.
///
/// Converts the raw optional parameters into a [`PlanetFilter`] (empty
/// strings count as unset) and delegates to the registry. The result may
/// be empty.
pub async fn handle_list_planets(registry: &Registry, params: &ListPlanets) -> Result<Vec<Planet>> {
    let filter = PlanetFilter::from(params);
    registry.list_planets(Some(filter)).await
}

/// Handle permanently deleting a planet.
///
/// # Errors
///
/// * `RegistryError::PlanetNotFound` - When no planet has the given id
pub async fn handle_delete_planet(registry: &Registry, params: &Id) -> Result<()> {
    registry.delete_planet(params).await
}
