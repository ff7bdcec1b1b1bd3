//! # Jokenpo Domain Layer
//!
//! Rock-paper-scissors-lizard-spock for any number of players, as pure
//! business logic with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - MoveKind, Player, GameSession, PlayerMove     ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  │  service/   - MoveRegistry, resolution                      ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Flow
//!
//! A [`GameSession`] is created with a fixed participant list. Each
//! participant submits one move, resolved from free text by the
//! [`MoveRegistry`]. The submission that completes the game runs
//! [`resolve`] exactly once and the session becomes finished.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    game::{GameError, GameId, GameSession, GameStatus, InvalidGameReason, MoveAccepted},
    move_kind::MoveKind,
    player::{Player, PlayerId},
    player_move::PlayerMove,
    timestamp::Timestamp,
};

pub use repository::{
    game_repository::{GameRepository, RepositoryError},
    move_repository::MoveRepository,
    player_repository::PlayerRepository,
};

pub use service::{
    move_registry::{InvalidMoveError, MoveRegistry},
    resolution::{resolve, Resolution},
};
