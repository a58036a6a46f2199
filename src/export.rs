//! CSV export of standings and pairings for the tournament operator.

use crate::models::{Pairing, StandingRow, StorageError};
use std::io::Write;

/// Write `id,name,wins,matches` rows, best first.
pub fn write_standings_csv<W: Write>(
    out: W,
    standings: &[StandingRow],
) -> Result<(), StorageError> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["id", "name", "wins", "matches"])?;
    for row in standings {
        w.write_record([
            row.player_id.to_string(),
            row.name.clone(),
            row.wins.to_string(),
            row.matches_played.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Write one row per pairing; a bye shows as `0,BYE` on the second side.
pub fn write_pairings_csv<W: Write>(
    out: W,
    pairings: &[Pairing],
) -> Result<(), StorageError> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["player_a_id", "player_a_name", "player_b_id", "player_b_name"])?;
    for p in pairings {
        let (a_id, a_name, b_id, b_name) = p.to_tuple();
        w.write_record([
            a_id.to_string(),
            a_name.to_string(),
            b_id.to_string(),
            b_name.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
