//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

// Submodules
pub mod routes;

// Server components
pub mod builder;
mod handlers;
pub mod server;
pub mod state;

pub use state::AppState;
