//! Domain Models - The vocabulary of Jokenpo
//!
//! Every name here should match how players talk about the game.

pub mod game;
pub mod move_kind;
pub mod player;
pub mod player_move;
pub mod timestamp;
