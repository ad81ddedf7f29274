//! Planet HTTP routes and handlers.

use std::sync::Arc;

use atlas_core::{
    handle_create_planet, handle_delete_planet, handle_get_planet, handle_get_planet_by_name,
    handle_list_planets,
    params::{CreatePlanet, Id, ListPlanets, Name},
    Planet, Registry,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use log::{debug, info};

use super::errors::{error_response, registry_error_response, ApiError};

/// Create planet routes
pub fn planet_routes(registry: Arc<Registry>) -> Router {
    Router::new()
        .route("/planets", post(create_planet_handler))
        .route("/planets", get(list_planets_handler))
        .route("/planets/{id}", get(get_planet_handler))
        .route("/planets/{id}", delete(delete_planet_handler))
        .route("/planets/name/{name}", get(get_planet_by_name_handler))
        .with_state(registry)
}

async fn create_planet_handler(
    State(registry): State<Arc<Registry>>,
    Json(params): Json<CreatePlanet>,
) -> Result<(StatusCode, Json<Planet>), ApiError> {
    let planet = handle_create_planet(&registry, &params)
        .await
        .map_err(registry_error_response)?;

    info!("Registered {planet}");
    Ok((StatusCode::CREATED, Json(planet)))
}

async fn get_planet_handler(
    State(registry): State<Arc<Registry>>,
    Path(id): Path<u64>,
) -> Result<Json<Planet>, ApiError> {
    let planet = handle_get_planet(&registry, &Id { id })
        .await
        .map_err(registry_error_response)?;

    planet.map(Json).ok_or_else(|| {
        error_response(
            StatusCode::NOT_FOUND,
            format!("Planet with ID {id} not found"),
        )
    })
}

async fn get_planet_by_name_handler(
    State(registry): State<Arc<Registry>>,
    Path(name): Path<String>,
) -> Result<Json<Planet>, ApiError> {
    let planet = handle_get_planet_by_name(&registry, &Name { name: name.clone() })
        .await
        .map_err(registry_error_response)?;

    planet.map(Json).ok_or_else(|| {
        error_response(
            StatusCode::NOT_FOUND,
            format!("Planet named '{name}' not found"),
        )
    })
}

async fn list_planets_handler(
    State(registry): State<Arc<Registry>>,
    Query(params): Query<ListPlanets>,
) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = handle_list_planets(&registry, &params)
        .await
        .map_err(registry_error_response)?;

    debug!("Listed {} planets", planets.len());
    Ok(Json(planets))
}

async fn delete_planet_handler(
    State(registry): State<Arc<Registry>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    handle_delete_planet(&registry, &Id { id })
        .await
        .map_err(registry_error_response)?;

    info!("Deleted planet {id}");
    Ok(StatusCode::NO_CONTENT)
}
