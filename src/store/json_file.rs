//! Durable store backed by a single JSON document on disk.
//!
//! Every mutation is applied to a copy of the state, written to a uniquely named temp
//! file in the same directory and persisted over the target. The in-memory copy is only
//! replaced once that succeeds, so a failed write leaves both disk and memory at the
//! previous state.

use super::{Snapshot, StoreState, TournamentStore};
use crate::models::{MatchRecord, Opponent, Player, PlayerId, StorageError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard};
use tempfile::NamedTempFile;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing data or starting empty if the file is absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let state = if path.exists() {
            let bytes = fs::read(&path)?;
            let state = serde_json::from_slice::<StoreState>(&bytes)?;
            state.validate()?;
            state
        } else {
            StoreState::default()
        };
        log::info!(
            "Opened tournament store at {} ({} player(s), {} match(es))",
            path.display(),
            state.players.len(),
            state.matches.len()
        );
        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, StorageError> {
        self.state.read().map_err(|_| StorageError::Poisoned)
    }

    /// Apply `f` to a copy of the state, persist it, then publish it.
    fn commit<T>(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut guard = self.state.write().map_err(|_| StorageError::Poisoned)?;
        let mut next = guard.clone();
        let out = f(&mut next)?;
        self.persist(&next)?;
        *guard = next;
        Ok(out)
    }

    fn persist(&self, state: &StoreState) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(state)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl TournamentStore for JsonFileStore {
    fn insert_player(&self, name: &str) -> Result<Player, StorageError> {
        let player = self.commit(|s| s.insert_player(name))?;
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
        let removed = self.commit(|s| Ok(std::mem::take(&mut s.players).len()))?;
        log::info!("Deleted {} player(s) from {}", removed, self.path.display());
        Ok(())
    }

    fn insert_match(
        &self,
        winner: PlayerId,
        loser: Opponent,
    ) -> Result<MatchRecord, StorageError> {
        let record = self.commit(|s| Ok(s.insert_match(winner, loser)))?;
        log::debug!("Recorded match {}: {} beat {:?}", record.id, winner, loser);
        Ok(record)
    }

    fn matches(&self) -> Result<Vec<MatchRecord>, StorageError> {
        Ok(self.read()?.matches.clone())
    }

    fn delete_matches(&self) -> Result<(), StorageError> {
        let removed = self.commit(|s| Ok(std::mem::take(&mut s.matches).len()))?;
        log::info!(
            "Deleted {} match record(s) from {}",
            removed,
            self.path.display()
        );
        Ok(())
    }

    fn snapshot(&self) -> Result<Snapshot, StorageError> {
        Ok(self.read()?.snapshot())
    }
}
