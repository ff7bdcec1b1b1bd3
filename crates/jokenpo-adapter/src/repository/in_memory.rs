//! In-Memory Repository Implementations
//!
//! Simple in-memory implementations of repository traits.
//! Useful for testing, the CLI, and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use jokenpo_domain::model::game::{GameId, GameSession};
use jokenpo_domain::model::player::{Player, PlayerId};
use jokenpo_domain::model::player_move::PlayerMove;
use jokenpo_domain::repository::game_repository::{GameRepository, RepositoryError};
use jokenpo_domain::repository::move_repository::MoveRepository;
use jokenpo_domain::repository::player_repository::PlayerRepository;
use tracing::debug;

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, RepositoryError> {
    lock.read().map_err(|_| RepositoryError::PersistenceError {
        message: "Failed to acquire read lock".to_string(),
    })
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, RepositoryError> {
    lock.write().map_err(|_| RepositoryError::PersistenceError {
        message: "Failed to acquire write lock".to_string(),
    })
}

/// In-memory Game Repository
///
/// Thread-safe implementation using RwLock. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<GameId, GameSession>>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameRepository for InMemoryGameRepository {
    fn load(&self, id: &GameId) -> Result<GameSession, RepositoryError> {
        read(&self.games)?
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                id: id.as_str().to_string(),
            })
    }

    fn save(&self, game: &GameSession) -> Result<(), RepositoryError> {
        debug!(game_id = %game.id(), moves = game.moves().len(), "saving game");
        write(&self.games)?.insert(game.id().clone(), game.clone());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<GameSession>, RepositoryError> {
        let mut games: Vec<GameSession> = read(&self.games)?.values().cloned().collect();
        games.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(games)
    }
}

/// In-memory Move Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryMoveRepository {
    moves: Arc<RwLock<HashMap<GameId, Vec<PlayerMove>>>>,
}

impl InMemoryMoveRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MoveRepository for InMemoryMoveRepository {
    fn append(&self, player_move: &PlayerMove) -> Result<(), RepositoryError> {
        debug!(
            game_id = %player_move.game_id(),
            player_id = %player_move.player_id(),
            "appending move"
        );
        write(&self.moves)?
            .entry(player_move.game_id().clone())
            .or_default()
            .push(player_move.clone());
        Ok(())
    }

    fn list_by_game(&self, game_id: &GameId) -> Result<Vec<PlayerMove>, RepositoryError> {
        Ok(read(&self.moves)?
            .get(game_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// In-memory Player Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlayerRepository {
    players: Arc<RwLock<HashMap<PlayerId, Player>>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerRepository for InMemoryPlayerRepository {
    fn register(&self, player: Player) -> Result<(), RepositoryError> {
        debug!(player_id = %player.id(), "registering player");
        write(&self.players)?.insert(player.id().clone(), player);
        Ok(())
    }

    fn find_by_id(&self, id: &PlayerId) -> Result<Option<Player>, RepositoryError> {
        Ok(read(&self.players)?.get(id).cloned())
    }

    fn list_all(&self) -> Result<Vec<Player>, RepositoryError> {
        let mut players: Vec<Player> = read(&self.players)?.values().cloned().collect();
        players.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(players)
    }
}
