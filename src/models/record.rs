//! MatchRecord, MatchId and Opponent: one reported outcome in the ledger.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a ledger entry.
pub type MatchId = Uuid;

/// Raw id used for "no opponent" at the external boundary.
pub const BYE_SENTINEL: u32 = 0;

/// The losing side of a match: a real player, or nobody (a bye).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opponent {
    Player(PlayerId),
    Bye,
}

impl Opponent {
    /// Decode the boundary representation, where `0` means bye.
    pub fn from_raw(raw: u32) -> Self {
        match PlayerId::new(raw) {
            Some(id) => Opponent::Player(id),
            None => Opponent::Bye,
        }
    }

    /// Encode for the boundary: the player's id, or `0` for a bye.
    pub fn to_raw(self) -> u32 {
        match self {
            Opponent::Player(id) => id.get(),
            Opponent::Bye => BYE_SENTINEL,
        }
    }

    pub fn player(self) -> Option<PlayerId> {
        match self {
            Opponent::Player(id) => Some(id),
            Opponent::Bye => None,
        }
    }

    pub fn is_bye(self) -> bool {
        self == Opponent::Bye
    }
}

impl From<PlayerId> for Opponent {
    fn from(id: PlayerId) -> Self {
        Opponent::Player(id)
    }
}

/// An immutable ledger entry: `winner` beat `loser` (or received a bye).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub winner: PlayerId,
    pub loser: Opponent,
    pub recorded_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(winner: PlayerId, loser: Opponent) -> Self {
        Self {
            id: Uuid::new_v4(),
            winner,
            loser,
            recorded_at: Utc::now(),
        }
    }

    pub fn is_bye(&self) -> bool {
        self.loser.is_bye()
    }
}
