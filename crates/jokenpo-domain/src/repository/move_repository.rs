//! Move Repository - Append-only log of submitted moves

use crate::model::game::GameId;
use crate::model::player_move::PlayerMove;
use crate::repository::game_repository::RepositoryError;

pub trait MoveRepository: Send + Sync {
    /// Record a move. Moves are never updated or removed.
    fn append(&self, player_move: &PlayerMove) -> Result<(), RepositoryError>;

    /// Moves of one game in submission order; empty for unknown games
    fn list_by_game(&self, game_id: &GameId) -> Result<Vec<PlayerMove>, RepositoryError>;

    fn count_by_game(&self, game_id: &GameId) -> Result<usize, RepositoryError> {
        Ok(self.list_by_game(game_id)?.len())
    }
}
