//! Error types surfaced by the store and the tournament components.

use crate::models::player::PlayerId;
use std::fmt;

/// Failure reported by a storage collaborator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    Io(String),
    /// The backing data could not be decoded or encoded.
    Corrupt(String),
    /// A previous writer panicked while holding the store lock.
    Poisoned,
    /// Every player id has been handed out.
    IdSpaceExhausted,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
            StorageError::Corrupt(msg) => write!(f, "Storage data is corrupt: {}", msg),
            StorageError::Poisoned => write!(f, "Storage lock poisoned"),
            StorageError::IdSpaceExhausted => write!(f, "No player ids left to assign"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}

impl From<csv::Error> for StorageError {
    fn from(e: csv::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Corrupt(e.to_string())
    }
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A report referenced a player id that is not registered (and is not a bye).
    UnknownPlayer(PlayerId),
    /// The storage collaborator failed; passed through unchanged.
    StorageUnavailable(StorageError),
    /// Input that sanitization should have rejected reached the core.
    InvalidInput(String),
}

impl fmt::Display for TournamentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentError::UnknownPlayer(id) => write!(f, "Unknown player id {}", id),
            TournamentError::StorageUnavailable(e) => write!(f, "Storage unavailable: {}", e),
            TournamentError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TournamentError::StorageUnavailable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StorageError> for TournamentError {
    fn from(e: StorageError) -> Self {
        TournamentError::StorageUnavailable(e)
    }
}
