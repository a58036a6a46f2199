//! Swiss-system tournament: standings derived from a match ledger and next-round pairings.

pub mod config;
pub mod export;
pub mod logic;
pub mod models;
pub mod sanitize;
pub mod store;

pub use config::{ByePolicy, TournamentConfig};
pub use logic::{
    compute_standings, count_byes, pair_round, MatchLedger, PlayerRegistry, RankedPool,
    StandingsCalculator, SwissPairer, Tournament,
};
pub use models::{
    MatchId, MatchRecord, Opponent, Pairing, Player, PlayerId, StandingRow, StorageError,
    TournamentError, BYE_NAME, BYE_SENTINEL,
};
pub use store::{reset_tournament, JsonFileStore, MemoryStore, Snapshot, TournamentStore};
