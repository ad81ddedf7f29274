//! Filter types for querying planets.

use crate::params::ListPlanets;

/// Filter options for querying planets.
///
/// Each set field constrains the query to planets whose corresponding
/// column matches exactly, ignoring case. Unset fields impose no
/// constraint, so the default filter matches every record. The filter
/// deliberately carries no `id` or `name` field; those never participate
/// in list matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetFilter {
    /// Filter by climate (case-insensitive exact match)
    pub climate: Option<String>,

    /// Filter by terrain (case-insensitive exact match)
    pub terrain: Option<String>,
}

impl PlanetFilter {
    /// Returns true when no field is set, i.e. the filter matches every
    /// persisted planet.
    pub fn is_empty(&self) -> bool {
        self.climate.is_none() && self.terrain.is_none()
    }
}

impl From<&ListPlanets> for PlanetFilter {
    /// Convert ListPlanets parameters to a PlanetFilter for list queries.
    ///
    /// Missing parameters and empty strings are both treated as unset: a
    /// request such as `?climate=` constrains nothing.
    fn from(params: &ListPlanets) -> Self {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self {
            climate: non_empty(&params.climate),
            terrain: non_empty(&params.terrain),
        }
    }
}
