//! Player registry: registration, count and bulk reset of the player pool.

use crate::models::{Player, PlayerId, TournamentError};
use crate::store::TournamentStore;

/// Owns the canonical set of competitors through the injected store.
pub struct PlayerRegistry<'a, S: TournamentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: TournamentStore + ?Sized> PlayerRegistry<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Register a player and return the id the store assigned.
    ///
    /// The name must already be sanitized (see [`crate::sanitize::clean_name`]); an empty
    /// name here is a caller bug and fails with `InvalidInput`. Names need not be unique.
    pub fn register(&self, name: &str) -> Result<PlayerId, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::InvalidInput(
                "player name must not be empty".to_string(),
            ));
        }
        Ok(self.store.insert_player(name)?.id)
    }

    pub fn count(&self) -> Result<usize, TournamentError> {
        Ok(self.store.player_count()?)
    }

    /// All players in registration order.
    pub fn players(&self) -> Result<Vec<Player>, TournamentError> {
        Ok(self.store.players()?)
    }

    /// Delete every player. Clear the match ledger first (or use
    /// [`crate::Tournament::reset_all`]) so no record outlives its players.
    pub fn reset_all(&self) -> Result<(), TournamentError> {
        Ok(self.store.delete_players()?)
    }
}
