//! Builder for creating and configuring Registry instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Registry;
use crate::{
    db::Database,
    error::{RegistryError, Result},
};

/// Builder for creating and configuring Registry instances.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    database_path: Option<PathBuf>,
}

impl RegistryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/atlas/atlas.db` or `~/.local/share/atlas/atlas.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured registry instance.
    ///
    /// Opens the database once to initialize the schema, so configuration
    /// problems surface at startup rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::FileSystem` if the database path is invalid
    /// Returns `RegistryError::Database` if database initialization fails
    pub async fn build(self) -> Result<Registry> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RegistryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), RegistryError>(())
        })
        .await
        .map_err(|e| RegistryError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Registry::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("atlas")
            .place_data_file("atlas.db")
            .map_err(|e| RegistryError::XdgDirectory(e.to_string()))
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
