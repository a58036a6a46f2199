//! Derived views: StandingRow and Pairing. Neither is ever persisted.

use crate::models::player::PlayerId;
use crate::models::record::Opponent;
use serde::{Deserialize, Serialize};

/// Display name emitted for the empty side of a bye pairing.
pub const BYE_NAME: &str = "BYE";

/// One row of the standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

/// One match for the next round. `player_b == Opponent::Bye` means `player_a` is unopposed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub player_a_id: PlayerId,
    pub player_a_name: String,
    pub player_b: Opponent,
    /// `"BYE"` when `player_b` is a bye.
    pub player_b_name: String,
}

impl Pairing {
    pub fn new(a: &StandingRow, b: &StandingRow) -> Self {
        Self {
            player_a_id: a.player_id,
            player_a_name: a.name.clone(),
            player_b: Opponent::Player(b.player_id),
            player_b_name: b.name.clone(),
        }
    }

    pub fn bye(a: &StandingRow) -> Self {
        Self {
            player_a_id: a.player_id,
            player_a_name: a.name.clone(),
            player_b: Opponent::Bye,
            player_b_name: BYE_NAME.to_string(),
        }
    }

    pub fn is_bye(&self) -> bool {
        self.player_b.is_bye()
    }

    /// Flat `(id1, name1, id2, name2)` view, with `0` standing in for the bye's id.
    pub fn to_tuple(&self) -> (u32, &str, u32, &str) {
        (
            self.player_a_id.get(),
            &self.player_a_name,
            self.player_b.to_raw(),
            &self.player_b_name,
        )
    }

    /// Both player ids covered by this pairing (one for a bye).
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        std::iter::once(self.player_a_id).chain(self.player_b.player())
    }
}
