//! Core library for the Atlas planet registry service.
//!
//! This crate provides the core logic for registering and querying
//! planets, including database operations, data models, validation, and
//! error handling. Interface crates (the HTTP server) sit on top of the
//! [`handlers`] layer and translate its results into their own protocol.
//!
//! # Quick Start
//!
//! ```rust
//! use atlas_core::{params::CreatePlanet, RegistryBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a registry instance
//! let registry = RegistryBuilder::new()
//!     .with_database_path(Some("planets.db"))
//!     .build()
//!     .await?;
//!
//! // Register a planet
//! let params = CreatePlanet {
//!     name: "Tatooine".to_string(),
//!     climate: "arid".to_string(),
//!     terrain: "desert".to_string(),
//! };
//! let planet = registry.create_planet(&params).await?;
//! println!("Registered: {}", planet);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod params;
pub mod registry;

// Re-export commonly used types
pub use db::Database;
pub use error::{RegistryError, Result};
pub use handlers::{
    handle_create_planet, handle_delete_planet, handle_get_planet, handle_get_planet_by_name,
    handle_list_planets,
};
pub use models::{Planet, PlanetFilter};
pub use params::{CreatePlanet, Id, ListPlanets, Name};
pub use registry::{Registry, RegistryBuilder};
