//! Player Repository - Who is allowed to sit at a game
//!
//! Players are registered by the surrounding system. The engine only
//! looks them up to check that a participant list references real people.

use crate::model::player::{Player, PlayerId};
use crate::repository::game_repository::RepositoryError;

pub trait PlayerRepository: Send + Sync {
    /// Register a player, replacing any previous record with the same id
    fn register(&self, player: Player) -> Result<(), RepositoryError>;

    fn find_by_id(&self, id: &PlayerId) -> Result<Option<Player>, RepositoryError>;

    fn list_all(&self) -> Result<Vec<Player>, RepositoryError>;
}
