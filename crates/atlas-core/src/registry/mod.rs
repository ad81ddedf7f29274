//! High-level registry API for managing planets.
//!
//! This module provides the main [`Registry`] interface for interacting
//! with the planet store. The registry is a thin coordinator between the
//! interface layers and the database; it owns no business logic beyond
//! dispatching each operation onto the blocking thread pool.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │    Registry     │    │    Database     │
//! │ (handlers.rs)   │───▶│ (planet_ops)    │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Interface glue       Async dispatch         Data persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Registry`] instances with
//!   configuration
//! - [`planet_ops`]: Planet operations (create, get, list, delete)
//!
//! Every operation opens a fresh [`crate::db::Database`] inside
//! `spawn_blocking`; consistency across concurrent requests is delegated
//! to SQLite's own transactional guarantees.

use std::path::PathBuf;

pub mod builder;
pub mod planet_ops;

#[cfg(test)]
mod tests;

pub use builder::RegistryBuilder;

/// Main registry interface for managing planets.
pub struct Registry {
    pub(crate) db_path: PathBuf,
}

impl Registry {
    /// Creates a new registry with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
