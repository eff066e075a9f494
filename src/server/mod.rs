//! HTTP server module.
//!
//! This module provides the axum application serving the dashboard page
//! and the JSON API.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
