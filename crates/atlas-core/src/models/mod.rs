//! Data models for the planet registry.
//!
//! This module contains the core domain model ([`Planet`]) and the typed
//! filter ([`PlanetFilter`]) consumed by the list query. The model
//! implements [`std::fmt::Display`] for log-friendly formatting and derives
//! field-by-field equality so records can be compared directly in service
//! code and tests.

pub mod filters;
pub mod planet;


// Re-export all public types at the models level
pub use filters::PlanetFilter;
pub use planet::Planet;
