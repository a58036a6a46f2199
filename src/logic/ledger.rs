//! Match ledger: append-only history of reported outcomes.

use crate::models::{MatchRecord, Opponent, PlayerId, TournamentError};
use crate::store::TournamentStore;

/// Validates and appends match results. Records are never edited or removed one by one;
/// a correction is a new report.
pub struct MatchLedger<'a, S: TournamentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: TournamentStore + ?Sized> MatchLedger<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Record that `winner` beat `loser` (or received a bye when `loser` is `Opponent::Bye`).
    ///
    /// Fails with `UnknownPlayer` if either real id is not registered, then with
    /// `InvalidInput` if a player is reported against themselves. Nothing is written on failure.
    pub fn report(
        &self,
        winner: PlayerId,
        loser: impl Into<Opponent>,
    ) -> Result<MatchRecord, TournamentError> {
        let loser = loser.into();
        let players = self.store.players()?;
        let known = |id: PlayerId| players.iter().any(|p| p.id == id);
        if !known(winner) {
            return Err(TournamentError::UnknownPlayer(winner));
        }
        if let Opponent::Player(id) = loser {
            if !known(id) {
                return Err(TournamentError::UnknownPlayer(id));
            }
        }
        if loser == Opponent::Player(winner) {
            return Err(TournamentError::InvalidInput(format!(
                "player {} cannot play against themselves",
                winner
            )));
        }

        Ok(self.store.insert_match(winner, loser)?)
    }

    /// Record an unopposed round for `player`.
    pub fn report_bye(&self, player: PlayerId) -> Result<MatchRecord, TournamentError> {
        self.report(player, Opponent::Bye)
    }

    /// Every record in report order.
    pub fn records(&self) -> Result<Vec<MatchRecord>, TournamentError> {
        Ok(self.store.matches()?)
    }

    pub fn len(&self) -> Result<usize, TournamentError> {
        Ok(self.store.matches()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, TournamentError> {
        Ok(self.len()? == 0)
    }

    /// Delete every match record.
    pub fn reset_all(&self) -> Result<(), TournamentError> {
        Ok(self.store.delete_matches()?)
    }
}
