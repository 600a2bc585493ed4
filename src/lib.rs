//! Shelf: a small personal book tracker.
//!
//! One SQLite table behind an actor, a handful of HTML routes in front.

pub mod config;
pub mod db;
pub mod error;
pub mod server;

pub use error::ShelfError;
