//! Planet CRUD operations and queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, RegistryError, Result},
    models::{Planet, PlanetFilter},
};

// SQL queries as const strings, shared across operations
const INSERT_PLANET_SQL: &str = "INSERT INTO planets (name, climate, terrain) VALUES (?1, ?2, ?3)";
const SELECT_PLANET_SQL: &str = "SELECT id, name, climate, terrain FROM planets WHERE id = ?1";
const SELECT_PLANET_BY_NAME_SQL: &str =
    "SELECT id, name, climate, terrain FROM planets WHERE name = ?1";
const SELECT_PLANETS_SQL: &str = "SELECT id, name, climate, terrain FROM planets";
const CHECK_PLANET_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM planets WHERE id = ?1)";
const DELETE_PLANET_SQL: &str = "DELETE FROM planets WHERE id = ?1";

/// Maps a database row onto a [`Planet`].
fn planet_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Planet> {
    Ok(Planet {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        climate: row.get(2)?,
        terrain: row.get(3)?,
    })
}

/// Translates an insert failure into the registry error taxonomy.
///
/// A UNIQUE violation on `planets.name` becomes [`RegistryError::DuplicateName`];
/// any other constraint violation (the non-empty CHECK backstop) becomes
/// [`RegistryError::InvalidInput`]. Everything else is a plain database error.
fn map_insert_error(error: rusqlite::Error, name: &str) -> RegistryError {
    if let rusqlite::Error::SqliteFailure(code, ref message) = error {
        if code.code == rusqlite::ErrorCode::ConstraintViolation {
            let detail = message.as_deref().unwrap_or("constraint violation");
            if detail.contains("UNIQUE") && detail.contains("planets.name") {
                return RegistryError::DuplicateName {
                    name: name.to_string(),
                };
            }
            return RegistryError::invalid_input("planet").with_reason(detail.to_string());
        }
    }
    RegistryError::database_error("Failed to insert planet", error)
}

impl super::Database {
    /// Inserts a new planet and returns the stored record including the
    /// assigned id.
    pub fn insert_planet(&mut self, name: &str, climate: &str, terrain: &str) -> Result<Planet> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(INSERT_PLANET_SQL, params![name, climate, terrain])
            .map_err(|e| map_insert_error(e, name))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Planet {
            id,
            name: name.into(),
            climate: climate.into(),
            terrain: terrain.into(),
        })
    }

    /// Retrieves a planet by its ID.
    pub fn get_planet(&self, id: u64) -> Result<Option<Planet>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLANET_SQL)
            .map_err(|e| RegistryError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id as i64], planet_from_row)
            .optional()
            .map_err(|e| RegistryError::database_error("Failed to query planet", e))
    }

    /// Retrieves a planet by its exact name.
    pub fn get_planet_by_name(&self, name: &str) -> Result<Option<Planet>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLANET_BY_NAME_SQL)
            .map_err(|e| RegistryError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![name], planet_from_row)
            .optional()
            .map_err(|e| RegistryError::database_error("Failed to query planet by name", e))
    }

    /// Lists all planets matching the optional filter.
    ///
    /// Each set filter field adds a case-insensitive exact-match condition;
    /// with no filter every record is returned. Rows come back in storage
    /// (insertion) order, no ordering is imposed here.
    pub fn list_planets(&self, filter: Option<&PlanetFilter>) -> Result<Vec<Planet>> {
        let mut query = SELECT_PLANETS_SQL.to_string();

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref climate) = f.climate {
                conditions.push("climate = ? COLLATE NOCASE");
                params_vec.push(Box::new(climate.clone()));
            }

            if let Some(ref terrain) = f.terrain {
                conditions.push("terrain = ? COLLATE NOCASE");
                params_vec.push(Box::new(terrain.clone()));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| RegistryError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let planets = stmt
            .query_map(&params_refs[..], planet_from_row)
            .map_err(|e| RegistryError::database_error("Failed to query planets", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| RegistryError::database_error("Failed to fetch planets", e))?;

        Ok(planets)
    }

    /// Permanently deletes a planet from the database.
    /// Fails with [`RegistryError::PlanetNotFound`] if no record has the id.
    pub fn delete_planet(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PLANET_EXISTS_SQL, params![id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| RegistryError::database_error("Failed to check planet existence", e))?;

        if !exists {
            return Err(RegistryError::PlanetNotFound { id });
        }

        tx.execute(DELETE_PLANET_SQL, params![id as i64])
            .map_err(|e| RegistryError::database_error("Failed to delete planet", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
