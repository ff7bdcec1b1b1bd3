//! PlayerMove - One player's throw in one game
//!
//! A Value Object, immutable once recorded. Its existence is what the
//! game checks to decide whether everyone has played.

use super::game::GameId;
use super::move_kind::MoveKind;
use super::player::PlayerId;
use super::timestamp::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMove {
    game_id: GameId,
    player_id: PlayerId,
    kind: MoveKind,
    /// 1-based position among the game's submissions
    sequence: usize,
    submitted_at: Timestamp,
}

impl PlayerMove {
    pub fn new(
        game_id: GameId,
        player_id: PlayerId,
        kind: MoveKind,
        sequence: usize,
        submitted_at: Timestamp,
    ) -> Self {
        Self {
            game_id,
            player_id,
            kind,
            sequence,
            submitted_at,
        }
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn submitted_at(&self) -> Timestamp {
        self.submitted_at
    }
}
