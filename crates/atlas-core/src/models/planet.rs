//! Planet model definition and related functionality.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a registered planet.
///
/// The `id` is assigned by the database on insert and is never reused or
/// reassigned. Equality is field-by-field over all four fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Planet {
    /// Unique identifier, generated by storage on insert
    pub id: u64,

    /// Name of the planet, unique across all records
    pub name: String,

    /// Climate description (e.g. "arid")
    pub climate: String,

    /// Terrain description (e.g. "desert")
    pub terrain: String,
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Planet [id={}, name={}, climate={}, terrain={}]",
            self.id, self.name, self.climate, self.terrain
        )
    }
}
