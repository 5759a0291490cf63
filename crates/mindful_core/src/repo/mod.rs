//! Persistence adapter: one serialized snapshot under one storage key.
//!
//! # Responsibility
//! - Abstract the browser-style key-value slot behind `KeyValueStore`.
//! - Serialize and deserialize the whole entry collection as one JSON blob.
//!
//! # Invariants
//! - The adapter never mutates the collection, it only snapshots it.
//! - Reads report malformed data as `Decode` so callers can fall back.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod entry_snapshot;
pub mod kv_store;

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Failure while reading or writing the persisted snapshot.
#[derive(Debug)]
pub enum PersistenceError {
    /// Backend storage failed.
    Db(DbError),
    /// The collection could not be serialized.
    Encode(serde_json::Error),
    /// The stored blob is not a valid entry array.
    Decode(serde_json::Error),
    /// Backend refused the operation for a reason it describes itself.
    Unavailable(String),
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode journal snapshot: {err}"),
            Self::Decode(err) => write!(f, "malformed journal snapshot: {err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) | Self::Decode(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for PersistenceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
