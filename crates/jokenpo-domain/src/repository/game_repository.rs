//! Game Repository - Abstract persistence for GameSessions

use crate::model::game::{GameId, GameSession};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Nothing stored under this id
    NotFound { id: String },
    /// The backing store failed
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { id } => write!(f, "Not found: {}", id),
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Game Repository Trait
///
/// A session is saved whole, moves included.
pub trait GameRepository: Send + Sync {
    /// Load a game, `NotFound` if it was never saved
    fn load(&self, id: &GameId) -> Result<GameSession, RepositoryError>;

    /// Save a game (create or update)
    fn save(&self, game: &GameSession) -> Result<(), RepositoryError>;

    /// Every stored game, oldest first
    fn list_all(&self) -> Result<Vec<GameSession>, RepositoryError>;

    /// Only the finished games
    fn list_finished(&self) -> Result<Vec<GameSession>, RepositoryError> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(GameSession::is_finished)
            .collect())
    }

    fn exists(&self, id: &GameId) -> Result<bool, RepositoryError> {
        match self.load(id) {
            Ok(_) => Ok(true),
            Err(RepositoryError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::move_kind::MoveKind;
    use crate::model::player::PlayerId;
    use crate::model::timestamp::Timestamp;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory implementation for testing
    struct InMemoryGameRepo {
        games: Mutex<HashMap<String, GameSession>>,
    }

    impl InMemoryGameRepo {
        fn new() -> Self {
            Self {
                games: Mutex::new(HashMap::new()),
            }
        }
    }

    impl GameRepository for InMemoryGameRepo {
        fn load(&self, id: &GameId) -> Result<GameSession, RepositoryError> {
            self.games
                .lock()
                .unwrap()
                .get(id.as_str())
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound {
                    id: id.as_str().to_string(),
                })
        }

        fn save(&self, game: &GameSession) -> Result<(), RepositoryError> {
            self.games
                .lock()
                .unwrap()
                .insert(game.id().as_str().to_string(), game.clone());
            Ok(())
        }

        fn list_all(&self) -> Result<Vec<GameSession>, RepositoryError> {
            Ok(self.games.lock().unwrap().values().cloned().collect())
        }
    }

    fn game(id: &str) -> GameSession {
        GameSession::create(
            GameId::new(id),
            PlayerId::new("p1"),
            vec![PlayerId::new("p1"), PlayerId::new("p2")],
            Timestamp::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_exists_and_list_finished() {
        let repo = InMemoryGameRepo::new();

        let open = game("g-open");
        let mut finished = game("g-done");
        finished
            .submit_move(&PlayerId::new("p1"), MoveKind::Rock, Timestamp::default())
            .unwrap();
        finished
            .submit_move(&PlayerId::new("p2"), MoveKind::Rock, Timestamp::default())
            .unwrap();

        repo.save(&open).unwrap();
        repo.save(&finished).unwrap();

        assert!(repo.exists(&GameId::new("g-open")).unwrap());
        assert!(!repo.exists(&GameId::new("g-missing")).unwrap());

        let done = repo.list_finished().unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id().as_str(), "g-done");
    }
}
