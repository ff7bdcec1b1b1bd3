//! Ranking - Wins per player across finished games
//!
//! Only the recorded outcome is consulted. A sole win counts in `wins`;
//! a shared win counts in `shared_wins` for every co-winner.

use std::collections::HashMap;

use jokenpo_domain::model::game::GameSession;
use jokenpo_domain::model::player::PlayerId;
use jokenpo_domain::service::resolution::Resolution;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub player_id: PlayerId,
    pub wins: usize,
    pub shared_wins: usize,
}

/// Rank every player with at least one win.
///
/// Sorted by wins, then shared wins (both descending), then id.
pub fn rank(games: &[GameSession]) -> Vec<RankingEntry> {
    let mut tally: HashMap<&PlayerId, (usize, usize)> = HashMap::new();

    for resolution in games.iter().filter_map(GameSession::resolution) {
        match resolution {
            Resolution::Tie => {}
            Resolution::Winner(id) => tally.entry(id).or_default().0 += 1,
            Resolution::SharedWin(ids) => {
                for id in ids {
                    tally.entry(id).or_default().1 += 1;
                }
            }
        }
    }

    let mut entries: Vec<RankingEntry> = tally
        .into_iter()
        .map(|(player_id, (wins, shared_wins))| RankingEntry {
            player_id: player_id.clone(),
            wins,
            shared_wins,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.shared_wins.cmp(&a.shared_wins))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    entries
}
