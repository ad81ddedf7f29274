//! Parameter structures for Atlas operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (HTTP, future CLI tooling) without
//! framework-specific derives or dependencies. Interface layers
//! deserialize request payloads directly into these types and pass them to
//! the handler layer; validation that must happen before a persistence
//! call lives here as well.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// Generic parameters for operations requiring just an ID.
///
/// Used for get_planet and delete_planet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for operations keyed by planet name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Name {
    /// The name of the planet to look up
    pub name: String,
}

/// Parameters for registering a new planet.
///
/// All three fields are required and must be non-empty; the record's `id`
/// is assigned by storage and therefore has no place here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlanet {
    /// Name of the planet (required, unique)
    pub name: String,
    /// Climate description (required)
    pub climate: String,
    /// Terrain description (required)
    pub terrain: String,
}

/// Parameters for listing planets.
///
/// Both fields are optional; either may be omitted for an unfiltered list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlanets {
    /// Restrict results to planets with this climate
    #[serde(default)]
    pub climate: Option<String>,
    /// Restrict results to planets with this terrain
    #[serde(default)]
    pub terrain: Option<String>,
}

impl CreatePlanet {
    /// Validate creation parameters before they reach the persistence
    /// layer.
    ///
    /// # Errors
    ///
    /// * `RegistryError::InvalidInput` - When any required field is empty
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("climate", &self.climate),
            ("terrain", &self.terrain),
        ] {
            if value.is_empty() {
                return Err(RegistryError::invalid_input(field)
                    .with_reason(format!("The '{field}' field must not be empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_planet_validate_valid() {
        let params = CreatePlanet {
            name: "Tatooine".to_string(),
            climate: "arid".to_string(),
            terrain: "desert".to_string(),
        };

        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_create_planet_validate_empty_name() {
        let params = CreatePlanet {
            name: String::new(),
            climate: "arid".to_string(),
            terrain: "desert".to_string(),
        };

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            RegistryError::InvalidInput { field, reason } => {
                assert_eq!(field, "name");
                assert!(reason.contains("must not be empty"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_create_planet_validate_empty_climate() {
        let params = CreatePlanet {
            name: "Tatooine".to_string(),
            climate: String::new(),
            terrain: "desert".to_string(),
        };

        match params.validate().unwrap_err() {
            RegistryError::InvalidInput { field, .. } => assert_eq!(field, "climate"),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_create_planet_validate_empty_terrain() {
        let params = CreatePlanet {
            name: "Tatooine".to_string(),
            climate: "arid".to_string(),
            terrain: String::new(),
        };

        match params.validate().unwrap_err() {
            RegistryError::InvalidInput { field, .. } => assert_eq!(field, "terrain"),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_create_planet_validate_all_empty_reports_first_field() {
        let params = CreatePlanet::default();

        match params.validate().unwrap_err() {
            RegistryError::InvalidInput { field, .. } => assert_eq!(field, "name"),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_create_planet_deserializes_without_id() {
        let params: CreatePlanet = serde_json::from_str(
            r#"{"name": "Tatooine", "climate": "arid", "terrain": "desert"}"#,
        )
        .expect("Failed to deserialize create params");

        assert_eq!(params.name, "Tatooine");
        assert_eq!(params.climate, "arid");
        assert_eq!(params.terrain, "desert");
    }
}
