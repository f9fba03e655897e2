//! # Persistence Store
//!
//! Apps and reviews live in a single SQLite database. Apps are stored as JSON
//! documents next to a handful of mirrored columns (`name`, `sort_order`,
//! `is_trending`, `created_at`) used for ordering, filtering and the review
//! moderation join. Reviews are flat and stored column by column.
//!
//! The connection is shared behind a mutex. All methods are synchronous;
//! handlers run them on the blocking thread pool through
//! [`crate::services::with_db`].

mod apps;
mod reviews;

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS apps (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    sort_order  INTEGER NOT NULL DEFAULT 0,
    is_trending INTEGER NOT NULL DEFAULT 0,
    created_at  INTEGER NOT NULL,
    document    TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS apps_sort_order ON apps (sort_order);

CREATE TABLE IF NOT EXISTS reviews (
    id         TEXT PRIMARY KEY,
    app_id     TEXT NOT NULL,
    name       TEXT NOT NULL,
    rating     INTEGER NOT NULL,
    text       TEXT NOT NULL DEFAULT '',
    approved   INTEGER NOT NULL DEFAULT 0,
    user_id    TEXT NOT NULL,
    created_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS reviews_app_id ON reviews (app_id, created_at);
";

/// Handle to the store. Cloning shares the underlying connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (creating if needed) the database at `path`. The special path
    /// `:memory:` yields a private in-memory database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Database {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// A panic while the lock was held leaves SQLite itself consistent, so
    /// a poisoned lock is taken over instead of failing every later call.
    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Current time truncated to the millisecond precision timestamps are
/// stored with, so freshly created records compare equal to reloaded ones.
pub fn now() -> DateTime<Utc> {
    from_millis(Utc::now().timestamp_millis())
}

fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}
