//! SQL DDL for the user-record store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `username` UNIQUE, the identifier sessions and the reset refer to
/// - `password_hash` holding a PHC-formatted salted hash
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS User (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);
"#;

/// Overwrites one user's hash. Both values are bound.
pub const UPDATE_PASSWORD_HASH: &str = "UPDATE User SET password_hash = ? WHERE username = ?";

pub const INSERT_USER: &str = "INSERT INTO User (username, password_hash) VALUES (?, ?)";

pub const SELECT_USER_BY_NAME: &str =
    "SELECT id, username, password_hash FROM User WHERE username = ?";
