//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `actor.rs`: the storage actor owning the connection pool
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)

pub mod actor;
pub mod models;
pub mod schema;

pub use models::{BookCreate, DbBook};
pub use schema::SQLITE_INIT;

pub use actor::{DbActorHandle, spawn};
