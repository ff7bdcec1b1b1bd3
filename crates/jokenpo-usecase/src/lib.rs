//! # Jokenpo Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//! it supplies clocks and ids, serialises submissions per game, persists
//! through the repository ports, and turns domain failures into
//! [`GameServiceError`]s.

pub mod error;
pub mod game_service;
pub mod locks;
pub mod ranking;

pub use jokenpo_domain;

pub use error::{Entity, GameServiceError, Result};
pub use game_service::GameService;
pub use locks::GameLocks;
pub use ranking::{rank, RankingEntry};
