//! Jokenpo CLI library: commands, config and output shared by the binary

pub mod commands;
pub mod config;
pub mod report;

use jokenpo_adapter::repository::in_memory::{
    InMemoryGameRepository, InMemoryMoveRepository, InMemoryPlayerRepository,
};
use jokenpo_usecase::GameService;

/// The service wired with in-memory storage
pub type InMemoryGameService =
    GameService<InMemoryGameRepository, InMemoryMoveRepository, InMemoryPlayerRepository>;

pub fn in_memory_service() -> InMemoryGameService {
    GameService::new(
        InMemoryGameRepository::new(),
        InMemoryMoveRepository::new(),
        InMemoryPlayerRepository::new(),
    )
}
