//! API layer - HTTP handlers and routes
//!
//! The service exposes a single stateless liveness route.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
