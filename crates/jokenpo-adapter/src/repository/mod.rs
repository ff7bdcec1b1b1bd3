//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from jokenpo-domain.

pub mod in_memory;

pub use in_memory::{InMemoryGameRepository, InMemoryMoveRepository, InMemoryPlayerRepository};
