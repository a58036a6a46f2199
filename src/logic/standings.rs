//! Standings: a ranked table derived from the player pool and the match ledger.

use crate::models::{Opponent, PlayerId, StandingRow, TournamentError};
use crate::store::{Snapshot, TournamentStore};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Rank every player in `snapshot`.
///
/// 1. Count wins (times as winner) and matches played (times on either side; a bye
///    counts once, for the player who received it).
/// 2. Sort by wins descending, then by registration order (ascending id).
///
/// Records naming a player missing from the snapshot are ignored.
pub fn compute_standings(snapshot: &Snapshot) -> Vec<StandingRow> {
    let mut tally: HashMap<PlayerId, (u32, u32)> = HashMap::new();
    for m in &snapshot.matches {
        let (wins, played) = tally.entry(m.winner).or_default();
        *wins += 1;
        *played += 1;
        if let Opponent::Player(loser) = m.loser {
            tally.entry(loser).or_default().1 += 1;
        }
    }

    let mut rows: Vec<StandingRow> = snapshot
        .players
        .iter()
        .map(|p| {
            let (wins, matches_played) = tally.get(&p.id).copied().unwrap_or_default();
            StandingRow {
                player_id: p.id,
                name: p.name.clone(),
                wins,
                matches_played,
            }
        })
        .collect();
    rows.sort_by_key(|r| (Reverse(r.wins), r.player_id));
    rows
}

/// Number of byes each player has received so far. Players without a bye are absent.
pub fn count_byes(snapshot: &Snapshot) -> HashMap<PlayerId, u32> {
    let mut byes = HashMap::new();
    for m in snapshot.matches.iter().filter(|m| m.is_bye()) {
        *byes.entry(m.winner).or_insert(0) += 1;
    }
    byes
}

/// Standings together with bye history, both taken from the same snapshot.
#[derive(Clone, Debug, Default)]
pub struct RankedPool {
    pub standings: Vec<StandingRow>,
    pub byes: HashMap<PlayerId, u32>,
    /// Receiver of the most recently reported bye.
    pub last_bye: Option<PlayerId>,
}

impl RankedPool {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            standings: compute_standings(snapshot),
            byes: count_byes(snapshot),
            last_bye: snapshot
                .matches
                .iter()
                .rev()
                .find(|m| m.is_bye())
                .map(|m| m.winner),
        }
    }

    pub fn byes_received(&self, player: PlayerId) -> u32 {
        self.byes.get(&player).copied().unwrap_or(0)
    }
}

/// Recomputes standings on demand from one consistent store snapshot.
pub struct StandingsCalculator<'a, S: TournamentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: TournamentStore + ?Sized> StandingsCalculator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Ranked standings, best first. Identical ledger state always yields the identical order.
    pub fn standings(&self) -> Result<Vec<StandingRow>, TournamentError> {
        Ok(compute_standings(&self.store.snapshot()?))
    }

    pub fn ranked_pool(&self) -> Result<RankedPool, TournamentError> {
        Ok(RankedPool::from_snapshot(&self.store.snapshot()?))
    }

    pub fn byes_received(&self, player: PlayerId) -> Result<u32, TournamentError> {
        Ok(self.ranked_pool()?.byes_received(player))
    }
}
