//! Input sanitization for values arriving from outside the core.
//!
//! Call these before [`crate::PlayerRegistry::register`] and [`crate::MatchLedger::report`];
//! the core itself only rejects what slips through.

use crate::models::{Opponent, PlayerId, TournamentError};
use lazy_regex::regex;

/// Strip complete markup tags and control characters from a display name, then collapse
/// whitespace. A `<` with no closing `>` is ordinary text and is kept.
///
/// Fails with `InvalidInput` if nothing printable is left.
pub fn clean_name(raw: &str) -> Result<String, TournamentError> {
    let stripped = regex!(r"<[^<>]*>").replace_all(raw, "");
    let cleaned = stripped
        .split(|c: char| c.is_whitespace() || c.is_control())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if cleaned.is_empty() {
        return Err(TournamentError::InvalidInput(format!(
            "name '{}' is empty after sanitizing",
            raw
        )));
    }
    Ok(cleaned)
}

/// Coerce an externally supplied id to an opponent; `0` is the bye.
pub fn parse_opponent(raw: &str) -> Result<Opponent, TournamentError> {
    let cleaned = clean_name(raw)?;
    cleaned
        .parse::<u32>()
        .map(Opponent::from_raw)
        .map_err(|_| TournamentError::InvalidInput(format!("'{}' is not a player id", raw)))
}

/// Coerce an externally supplied id that must name a real player (a winner, for example).
pub fn parse_player_id(raw: &str) -> Result<PlayerId, TournamentError> {
    parse_opponent(raw)?
        .player()
        .ok_or_else(|| TournamentError::InvalidInput("0 is reserved for byes".to_string()))
}
