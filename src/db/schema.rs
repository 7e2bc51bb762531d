//! SQL DDL for initializing the application storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema:
/// - `items` holds the record fields plus the generated PNG inline
///   (`image` BLOB + `image_content_type`), no separate blob store
/// - `users` are pre-provisioned; `username` UNIQUE
/// - `sessions` maps a client-held token to a user id with an expiry
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    salary INTEGER NOT NULL,
    gender TEXT NOT NULL,
    profession TEXT NOT NULL,
    jadagam TEXT NOT NULL,
    image BLOB NOT NULL,
    image_content_type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS sessions (
    token TEXT PRIMARY KEY,
    user_id INTEGER NOT NULL,
    expires_at TEXT NOT NULL -- RFC3339
);
"#;
