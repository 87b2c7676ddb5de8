//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure the Record Store connection.
//! - Apply schema migrations in deterministic order.
//! - Wrap the connection in an injectable shared handle.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - No caller reads or writes `automobiles` before migrations succeed.

use parking_lot::Mutex;
use rusqlite::Connection;
use std::sync::Arc;
use thiserror::Error;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Process-wide store handle, passed explicitly to whoever needs it.
///
/// Every statement runs while holding the mutex, so concurrent requests are
/// serialized at the connection level and nothing else.
pub type SharedConnection = Arc<Mutex<Connection>>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

/// Wraps a bootstrapped connection into a [`SharedConnection`].
pub fn share_connection(conn: Connection) -> SharedConnection {
    Arc::new(Mutex::new(conn))
}
