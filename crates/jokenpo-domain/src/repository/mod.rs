//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define HOW the domain wants to persist data,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait GameRepository  │  InMemoryGameRepository
//!   fn load()           │  (SQL, files, ...)
//!   fn save()           │
//! ```
//!
//! Methods take `&self` and the traits are `Send + Sync`: one repository is
//! shared by every request, so implementations bring their own locking.

pub mod game_repository;
pub mod move_repository;
pub mod player_repository;
