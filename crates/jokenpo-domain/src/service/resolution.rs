//! Resolution - Who won once every move is in
//!
//! 1. Collect the distinct kinds played, in one pass
//! 2. One kind: everybody threw the same thing, tie
//! 3. Two kinds: one of them beats the other; its holders win
//! 4. Three or more: the cycle has no outright winner, tie
//!
//! Pure and deterministic. Submission order never matters: winners are
//! reported sorted by id.

use std::collections::BTreeSet;

use crate::model::move_kind::MoveKind;
use crate::model::player::PlayerId;
use crate::model::player_move::PlayerMove;

/// Outcome of a finished game: zero, one or many winners
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nobody won
    Tie,
    /// Exactly one player holds the winning move
    Winner(PlayerId),
    /// Several players hold the winning move (sorted by id)
    SharedWin(Vec<PlayerId>),
}

impl Resolution {
    /// The sole winner, if any
    pub fn winner(&self) -> Option<&PlayerId> {
        match self {
            Resolution::Winner(id) => Some(id),
            Resolution::Tie | Resolution::SharedWin(_) => None,
        }
    }

    pub fn winners(&self) -> &[PlayerId] {
        match self {
            Resolution::Tie => &[],
            Resolution::Winner(id) => core::slice::from_ref(id),
            Resolution::SharedWin(ids) => ids,
        }
    }
}

impl core::fmt::Display for Resolution {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Resolution::Tie => write!(f, "Tie"),
            Resolution::Winner(id) => write!(f, "Winner: {}", id),
            Resolution::SharedWin(ids) => {
                let names: Vec<&str> = ids.iter().map(PlayerId::as_str).collect();
                write!(f, "Shared win: {}", names.join(", "))
            }
        }
    }
}

/// Resolve a complete set of moves (one per participant)
pub fn resolve(moves: &[PlayerMove]) -> Resolution {
    let kinds: BTreeSet<MoveKind> = moves.iter().map(PlayerMove::kind).collect();

    let mut present = kinds.iter().copied();
    let (first, second) = match (present.next(), present.next(), present.next()) {
        (Some(a), Some(b), None) => (a, b),
        _ => return Resolution::Tie,
    };
    let winning = if first.dominates(second) { first } else { second };

    let mut winners: Vec<PlayerId> = moves
        .iter()
        .filter(|m| m.kind() == winning)
        .map(|m| m.player_id().clone())
        .collect();
    winners.sort();

    match winners.len() {
        1 => Resolution::Winner(winners.remove(0)),
        _ => Resolution::SharedWin(winners),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::game::GameId;
    use crate::model::timestamp::Timestamp;

    fn moves(plays: &[(&str, MoveKind)]) -> Vec<PlayerMove> {
        plays
            .iter()
            .enumerate()
            .map(|(i, (player, kind))| {
                PlayerMove::new(
                    GameId::new("g-001"),
                    PlayerId::new(*player),
                    *kind,
                    i + 1,
                    Timestamp::from_millis(i as i64),
                )
            })
            .collect()
    }

    #[test]
    fn test_two_players_distinct_moves() {
        let result = resolve(&moves(&[("p1", MoveKind::Scissors), ("p2", MoveKind::Lizard)]));
        assert_eq!(result, Resolution::Winner(PlayerId::new("p1")));

        let result = resolve(&moves(&[("p1", MoveKind::Rock), ("p2", MoveKind::Spock)]));
        assert_eq!(result, Resolution::Winner(PlayerId::new("p2")));
    }

    #[test]
    fn test_all_same_move_is_a_tie() {
        let result = resolve(&moves(&[
            ("p1", MoveKind::Spock),
            ("p2", MoveKind::Spock),
            ("p3", MoveKind::Spock),
        ]));
        assert_eq!(result, Resolution::Tie);
    }

    #[test]
    fn test_three_kinds_is_a_tie() {
        let result = resolve(&moves(&[
            ("p1", MoveKind::Rock),
            ("p2", MoveKind::Paper),
            ("p3", MoveKind::Scissors),
        ]));
        assert_eq!(result, Resolution::Tie);
    }

    #[test]
    fn test_single_holder_of_winning_kind_wins_alone() {
        let result = resolve(&moves(&[
            ("p1", MoveKind::Paper),
            ("p2", MoveKind::Lizard),
            ("p3", MoveKind::Paper),
        ]));
        assert_eq!(result, Resolution::Winner(PlayerId::new("p2")));
    }

    #[test]
    fn test_several_holders_share_the_win() {
        let result = resolve(&moves(&[
            ("p3", MoveKind::Spock),
            ("p2", MoveKind::Scissors),
            ("p1", MoveKind::Spock),
        ]));
        assert_eq!(
            result,
            Resolution::SharedWin(vec![PlayerId::new("p1"), PlayerId::new("p3")])
        );
        assert_eq!(result.winner(), None);
        assert_eq!(result.winners().len(), 2);
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = moves(&[
            ("p1", MoveKind::Rock),
            ("p2", MoveKind::Lizard),
            ("p3", MoveKind::Rock),
            ("p4", MoveKind::Lizard),
        ]);
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(resolve(&forward), resolve(&backward));
        assert_eq!(resolve(&forward), resolve(&forward));
    }

    #[test]
    fn test_empty_is_a_tie() {
        assert_eq!(resolve(&[]), Resolution::Tie);
    }

    #[test]
    fn test_display() {
        assert_eq!(Resolution::Tie.to_string(), "Tie");
        assert_eq!(
            Resolution::Winner(PlayerId::new("ana")).to_string(),
            "Winner: ana"
        );
    }
}
