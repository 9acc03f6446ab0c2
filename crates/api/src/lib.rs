//! Agency site API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, image
//! host client) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod image_host;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
