//! Swiss pairing: adjacent players in the standings meet in the next round.

use crate::config::{ByePolicy, TournamentConfig};
use crate::logic::standings::{RankedPool, StandingsCalculator};
use crate::models::{Pairing, StandingRow, TournamentError};
use crate::store::TournamentStore;

/// Pick the standings index that sits out this round.
///
/// Candidates are ordered from the policy's end of the table. With `avoid_repeat_byes`
/// the most recent bye receiver is skipped (unless they are alone), and among the rest
/// the one with the fewest byes so far wins, nearest the policy's end first.
fn bye_index(pool: &RankedPool, policy: ByePolicy, avoid_repeat_byes: bool) -> Option<usize> {
    let n = pool.standings.len();
    let candidates: Vec<usize> = match policy {
        ByePolicy::Trailing => (0..n).rev().collect(),
        ByePolicy::Leading => (0..n).collect(),
    };
    let fallback = *candidates.first()?;
    if !avoid_repeat_byes || n == 1 {
        return Some(fallback);
    }
    let fairest = candidates
        .into_iter()
        .filter(|&i| Some(pool.standings[i].player_id) != pool.last_bye)
        .min_by_key(|&i| pool.byes_received(pool.standings[i].player_id));
    Some(fairest.unwrap_or(fallback))
}

/// Generate pairings for the next round from a ranked pool.
///
/// 1. If the pool is odd-sized, one player (see [`ByePolicy`]) gets a bye pairing, emitted first.
/// 2. The rest are paired in standings order: ranks 1-2, 3-4, ...
///
/// Every player appears in exactly one pairing. An empty pool yields no pairings.
pub fn pair_round(pool: &RankedPool, policy: ByePolicy, avoid_repeat_byes: bool) -> Vec<Pairing> {
    let mut pairings = Vec::with_capacity(pool.standings.len() / 2 + 1);
    let mut remaining: Vec<&StandingRow> = pool.standings.iter().collect();

    if remaining.len() % 2 != 0 {
        if let Some(i) = bye_index(pool, policy, avoid_repeat_byes) {
            pairings.push(Pairing::bye(remaining.remove(i)));
        }
    }

    pairings.extend(
        remaining
            .chunks_exact(2)
            .map(|couple| Pairing::new(couple[0], couple[1])),
    );
    pairings
}

/// Produces the next round's pairing list from the current standings.
pub struct SwissPairer<'a, S: TournamentStore + ?Sized> {
    standings: StandingsCalculator<'a, S>,
    bye_policy: ByePolicy,
    avoid_repeat_byes: bool,
}

impl<'a, S: TournamentStore + ?Sized> SwissPairer<'a, S> {
    /// Pairer with the default configuration (trailing bye, repeat byes avoided).
    pub fn new(store: &'a S) -> Self {
        Self::with_config(store, &TournamentConfig::default())
    }

    pub fn with_config(store: &'a S, config: &TournamentConfig) -> Self {
        Self {
            standings: StandingsCalculator::new(store),
            bye_policy: config.bye_policy,
            avoid_repeat_byes: config.avoid_repeat_byes,
        }
    }

    /// Pairings for the next round, computed from one consistent snapshot.
    pub fn next_round_pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        let pool = self.standings.ranked_pool()?;
        Ok(pair_round(&pool, self.bye_policy, self.avoid_repeat_byes))
    }
}
