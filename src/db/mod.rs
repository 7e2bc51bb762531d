//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool construction and the storage type

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbItem, DbUser, ItemFields};
pub use schema::SQLITE_INIT;
pub use sqlite::{DeskStorage, SqlitePool, connect};
