//! Player and PlayerId data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a player, assigned serially by the store starting at 1.
///
/// Ids are handed out in registration order, so ascending id doubles as the
/// standings tie-break.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PlayerId(u32);

impl PlayerId {
    /// First id a fresh store hands out. Zero is reserved for the external bye sentinel.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Wrap a raw id. Returns `None` for `0`, which never names a real player.
    pub fn new(raw: u32) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The id following this one, or `None` once the id space is used up.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl TryFrom<u32> for PlayerId {
    type Error = String;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| "player id 0 is reserved for byes".to_string())
    }
}

impl From<PlayerId> for u32 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered competitor. Never mutated after registration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

impl Player {
    /// Create a player row with the given id and name, stamped now.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            registered_at: Utc::now(),
        }
    }
}
