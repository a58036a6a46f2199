//! Data structures for the Swiss tournament: players, ledger records, standings, pairings.

mod error;
mod player;
mod record;
mod standing;

pub use error::{StorageError, TournamentError};
pub use player::{Player, PlayerId};
pub use record::{MatchId, MatchRecord, Opponent, BYE_SENTINEL};
pub use standing::{Pairing, StandingRow, BYE_NAME};
