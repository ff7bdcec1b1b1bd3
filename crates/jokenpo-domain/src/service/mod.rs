//! Domain Services - Business logic that doesn't belong to a single entity
//!
//! `move_registry` turns what players type into a [`MoveKind`](crate::MoveKind);
//! `resolution` decides who won once every move is in.

pub mod move_registry;
pub mod resolution;
