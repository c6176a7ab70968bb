//! Database module: the `User` table and the store the credential reset writes through.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL and the statements issued against it (SQLite-first)
//! - `statement.rs`: SQL text paired with its bound values
//! - `sqlite.rs`: pooled SQLite storage

pub mod models;
pub mod schema;
pub mod sqlite;
pub mod statement;

pub use models::DbUser;
pub use schema::{SQLITE_INIT, UPDATE_PASSWORD_HASH};
pub use sqlite::{SqlitePool, UserStorage};
pub use statement::{BoundStatement, UserStore};
