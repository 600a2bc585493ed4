//! HTTP layer: router assembly, shared state and the route handlers.

pub mod router;
pub mod routes;

pub use router::{ShelfState, shelf_router};
