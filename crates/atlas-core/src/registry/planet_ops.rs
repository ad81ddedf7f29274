//! Planet operations for the Registry.

use tokio::task;

use super::Registry;
use crate::{
    db::Database,
    error::{RegistryError, Result},
    models::{Planet, PlanetFilter},
    params::{CreatePlanet, Id, Name},
};

impl Registry {
    /// Registers a new planet and returns the stored record including the
    /// id assigned by storage.
    pub async fn create_planet(&self, params: &CreatePlanet) -> Result<Planet> {
        let db_path = self.db_path.clone();
        let name = params.name.clone();
        let climate = params.climate.clone();
        let terrain = params.terrain.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_planet(&name, &climate, &terrain)
        })
        .await
        .map_err(|e| RegistryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a planet by its ID.
    pub async fn get_planet(&self, params: &Id) -> Result<Option<Planet>> {
        let db_path = self.db_path.clone();
        let planet_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_planet(planet_id)
        })
        .await
        .map_err(|e| RegistryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a planet by its exact name.
    pub async fn get_planet_by_name(&self, params: &Name) -> Result<Option<Planet>> {
        let db_path = self.db_path.clone();
        let name = params.name.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_planet_by_name(&name)
        })
        .await
        .map_err(|e| RegistryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all planets with optional filtering.
    pub async fn list_planets(&self, filter: Option<PlanetFilter>) -> Result<Vec<Planet>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_planets(filter.as_ref())
        })
        .await
        .map_err(|e| RegistryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a planet.
    /// Fails with [`RegistryError::PlanetNotFound`] if the id is unknown.
    pub async fn delete_planet(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let planet_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_planet(planet_id)
        })
        .await
        .map_err(|e| RegistryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
