//! Tournament: the four components wired to one store and one configuration.

use crate::config::TournamentConfig;
use crate::logic::{MatchLedger, PlayerRegistry, StandingsCalculator, SwissPairer};
use crate::models::{MatchRecord, Opponent, Pairing, PlayerId, StandingRow, TournamentError};
use crate::store::{reset_tournament, TournamentStore};

/// One flat Swiss cycle over a single player pool and match history.
pub struct Tournament<S: TournamentStore> {
    store: S,
    config: TournamentConfig,
}

impl<S: TournamentStore> Tournament<S> {
    pub fn new(store: S, config: TournamentConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn registry(&self) -> PlayerRegistry<'_, S> {
        PlayerRegistry::new(&self.store)
    }

    pub fn ledger(&self) -> MatchLedger<'_, S> {
        MatchLedger::new(&self.store)
    }

    pub fn calculator(&self) -> StandingsCalculator<'_, S> {
        StandingsCalculator::new(&self.store)
    }

    pub fn pairer(&self) -> SwissPairer<'_, S> {
        SwissPairer::with_config(&self.store, &self.config)
    }

    pub fn register(&self, name: &str) -> Result<PlayerId, TournamentError> {
        self.registry().register(name)
    }

    pub fn report(
        &self,
        winner: PlayerId,
        loser: impl Into<Opponent>,
    ) -> Result<MatchRecord, TournamentError> {
        self.ledger().report(winner, loser)
    }

    pub fn standings(&self) -> Result<Vec<StandingRow>, TournamentError> {
        self.calculator().standings()
    }

    pub fn next_round_pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        self.pairer().next_round_pairings()
    }

    /// Clear matches, then players.
    pub fn reset_all(&self) -> Result<(), TournamentError> {
        Ok(reset_tournament(&self.store)?)
    }
}
