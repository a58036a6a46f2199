//! Tournament business logic: registry, ledger, standings, pairing.

mod ledger;
mod pairing;
mod registry;
mod standings;
mod tournament;

pub use ledger::MatchLedger;
pub use pairing::{pair_round, SwissPairer};
pub use registry::PlayerRegistry;
pub use standings::{compute_standings, count_byes, RankedPool, StandingsCalculator};
pub use tournament::Tournament;
