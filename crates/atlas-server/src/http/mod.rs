//! HTTP interface for the Atlas planet registry.
//!
//! This module exposes the registry as a small JSON API and owns all
//! translation between registry outcomes and HTTP status codes:
//!
//! | Operation   | Method & Path          | Success | Failure       |
//! |-------------|------------------------|---------|---------------|
//! | Create      | POST /planets          | 201     | 422 / 409     |
//! | Get by id   | GET /planets/{id}      | 200     | 404           |
//! | Get by name | GET /planets/name/{n}  | 200     | 404           |
//! | List        | GET /planets           | 200     | —             |
//! | Delete      | DELETE /planets/{id}   | 204     | 404           |

pub mod errors;
pub mod routes;

use std::sync::Arc;

use atlas_core::Registry;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub use errors::ErrorResponse;
pub use routes::planet_routes;

/// Builds the application router with all routes and middleware applied.
pub fn build_router(registry: Arc<Registry>) -> Router {
    // Permissive CORS, suitable for development use
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().merge(planet_routes(registry)).layer(cors)
}
