//! Storage collaborator: the interface the tournament components read and write through.
//!
//! Each method is one atomic unit: it either commits fully or returns an error and
//! leaves the store untouched. `snapshot` reads players and matches under a single
//! lock so a standings or pairing computation never sees a half-applied write.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::{MatchRecord, Opponent, Player, PlayerId, StorageError};
use serde::{Deserialize, Serialize};

/// Players and matches read together at one point in time.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// In registration order.
    pub players: Vec<Player>,
    /// In report order.
    pub matches: Vec<MatchRecord>,
}

pub trait TournamentStore: Send + Sync {
    /// Persist a new player and return the row with its freshly assigned id.
    fn insert_player(&self, name: &str) -> Result<Player, StorageError>;

    /// All players in registration order.
    fn players(&self) -> Result<Vec<Player>, StorageError>;

    fn player_count(&self) -> Result<usize, StorageError>;

    fn delete_players(&self) -> Result<(), StorageError>;

    /// Append one record to the match history.
    fn insert_match(
        &self,
        winner: PlayerId,
        loser: Opponent,
    ) -> Result<MatchRecord, StorageError>;

    /// All match records in report order.
    fn matches(&self) -> Result<Vec<MatchRecord>, StorageError>;

    fn delete_matches(&self) -> Result<(), StorageError>;

    /// Players and matches read inside one logical read transaction.
    fn snapshot(&self) -> Result<Snapshot, StorageError>;
}

/// Clear the whole tournament: matches first, then players, so no record is ever
/// left pointing at a deleted player.
pub fn reset_tournament<S: TournamentStore + ?Sized>(store: &S) -> Result<(), StorageError> {
    store.delete_matches()?;
    store.delete_players()
}

/// State shared by the bundled store implementations.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
struct StoreState {
    next_id: PlayerId,
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            next_id: PlayerId::FIRST,
            players: Vec::new(),
            matches: Vec::new(),
        }
    }
}

impl StoreState {
    fn insert_player(&mut self, name: &str) -> Result<Player, StorageError> {
        let after = self
            .next_id
            .checked_next()
            .ok_or(StorageError::IdSpaceExhausted)?;
        let player = Player::new(self.next_id, name);
        self.next_id = after;
        self.players.push(player.clone());
        Ok(player)
    }

    /// Reject loaded data whose id counter would hand out an id already in use.
    fn validate(&self) -> Result<(), StorageError> {
        if let Some(p) = self.players.iter().find(|p| p.id >= self.next_id) {
            return Err(StorageError::Corrupt(format!(
                "player id {} is not below next id {}",
                p.id, self.next_id
            )));
        }
        Ok(())
    }

    fn insert_match(&mut self, winner: PlayerId, loser: Opponent) -> MatchRecord {
        let record = MatchRecord::new(winner, loser);
        self.matches.push(record.clone());
        record
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self.players.clone(),
            matches: self.matches.clone(),
        }
    }
}
