//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: the `CatRecord` row and the raw form it is parsed from
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pooled storage handle

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{CatRecord, RawCatForm};
pub use schema::SQLITE_INIT;
pub use sqlite::{CatsStorage, SqlitePool};
