//! CLI Commands

pub mod moves;
pub mod play;
pub mod simulate;

pub use moves::MovesCommand;
pub use play::PlayCommand;
pub use simulate::SimulateCommand;
