//! Error types for the game service

use jokenpo_domain::model::game::{GameError, InvalidGameReason};
use jokenpo_domain::repository::game_repository::RepositoryError;
use jokenpo_domain::service::move_registry::InvalidMoveError;
use thiserror::Error;

/// What a `NotFound` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Game,
    Player,
}

impl core::fmt::Display for Entity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Entity::Game => write!(f, "Game"),
            Entity::Player => write!(f, "Player"),
        }
    }
}

/// Every way a caller-facing operation can fail.
///
/// Domain failures are deterministic and never retried; `Storage` is the
/// only one that comes from a collaborator.
#[derive(Debug, Error)]
pub enum GameServiceError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),

    #[error("Invalid game: {0}")]
    InvalidGame(InvalidGameReason),

    #[error("Player {player_id} is not part of game {game_id}")]
    NotAParticipant { game_id: String, player_id: String },

    #[error("Player {player_id} already played in game {game_id}")]
    DuplicateMove { game_id: String, player_id: String },

    #[error("Game {game_id} is already finished")]
    GameAlreadyFinished { game_id: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    #[error("Storage error: {0}")]
    Storage(#[source] RepositoryError),
}

impl From<GameError> for GameServiceError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidGame(reason) => GameServiceError::InvalidGame(reason),
            GameError::NotAParticipant { game_id, player_id } => {
                GameServiceError::NotAParticipant { game_id, player_id }
            }
            GameError::DuplicateMove { game_id, player_id } => {
                GameServiceError::DuplicateMove { game_id, player_id }
            }
            GameError::GameAlreadyFinished { game_id } => {
                GameServiceError::GameAlreadyFinished { game_id }
            }
        }
    }
}

impl From<RepositoryError> for GameServiceError {
    fn from(err: RepositoryError) -> Self {
        GameServiceError::Storage(err)
    }
}

pub type Result<T> = std::result::Result<T, GameServiceError>;
