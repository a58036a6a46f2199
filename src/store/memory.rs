//! In-memory store: everything lives behind one RwLock for the life of the process.

use super::{Snapshot, StoreState, TournamentStore};
use crate::models::{MatchRecord, Opponent, Player, PlayerId, StorageError};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, StorageError> {
        self.state.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, StorageError> {
        self.state.write().map_err(|_| StorageError::Poisoned)
    }
}

impl TournamentStore for MemoryStore {
    fn insert_player(&self, name: &str) -> Result<Player, StorageError> {
        let player = self.write()?.insert_player(name)?;
        log::debug!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    fn players(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.read()?.players.clone())
    }

    fn player_count(&self) -> Result<usize, StorageError> {
        Ok(self.read()?.players.len())
    }

    fn delete_players(&self) -> Result<(), StorageError> {
        let removed = std::mem::take(&mut self.write()?.players).len();
        log::info!("Deleted {} player(s)", removed);
        Ok(())
    }

    fn insert_match(
        &self,
        winner: PlayerId,
        loser: Opponent,
    ) -> Result<MatchRecord, StorageError> {
        let record = self.write()?.insert_match(winner, loser);
        log::debug!("Recorded match {}: {} beat {:?}", record.id, winner, loser);
        Ok(record)
    }

    fn matches(&self) -> Result<Vec<MatchRecord>, StorageError> {
        Ok(self.read()?.matches.clone())
    }

    fn delete_matches(&self) -> Result<(), StorageError> {
        let removed = std::mem::take(&mut self.write()?.matches).len();
        log::info!("Deleted {} match record(s)", removed);
        Ok(())
    }

    fn snapshot(&self) -> Result<Snapshot, StorageError> {
        Ok(self.read()?.snapshot())
    }
}
