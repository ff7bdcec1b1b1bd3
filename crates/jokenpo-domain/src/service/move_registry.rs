//! Move Registry - The only door for move names coming from outside
//!
//! Players type "Rock", "tesoura" or "JOGADA SPOCK". The registry
//! normalises the text and maps it onto a [`MoveKind`]. Synonyms live in a
//! static table here so adding one never touches the resolution rules.

use crate::model::move_kind::MoveKind;

/// Prefix some clients put in front of a move ("jogada spock")
const PLAY_PREFIX: &str = "jogada ";

/// Normalised name → kind
const ACCEPTED_NAMES: &[(&str, MoveKind)] = &[
    ("rock", MoveKind::Rock),
    ("paper", MoveKind::Paper),
    ("scissors", MoveKind::Scissors),
    ("lizard", MoveKind::Lizard),
    ("spock", MoveKind::Spock),
    ("pedra", MoveKind::Rock),
    ("papel", MoveKind::Paper),
    ("tesoura", MoveKind::Scissors),
    ("lagarto", MoveKind::Lizard),
];

/// Stateless lookup from free text to MoveKind
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveRegistry;

impl MoveRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a raw move name.
    ///
    /// Case and surrounding whitespace are ignored, and an optional
    /// "jogada " prefix is stripped.
    pub fn resolve(&self, name: &str) -> Result<MoveKind, InvalidMoveError> {
        let normalized = normalize(name);
        let key = normalized
            .strip_prefix(PLAY_PREFIX)
            .unwrap_or(normalized.as_str());

        ACCEPTED_NAMES
            .iter()
            .find(|(accepted, _)| *accepted == key)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| InvalidMoveError {
                name: name.to_string(),
            })
    }

    /// Every bare name accepted for `kind` (without the "jogada " prefix)
    pub fn names_for(&self, kind: MoveKind) -> Vec<&'static str> {
        ACCEPTED_NAMES
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Every bare name the registry accepts
    pub fn accepted_names(&self) -> Vec<&'static str> {
        ACCEPTED_NAMES.iter().map(|(name, _)| *name).collect()
    }
}

/// Lowercase, trim, and squeeze runs of whitespace into one space
fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A move name the registry does not know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMoveError {
    /// The text as submitted
    pub name: String,
}

impl core::fmt::Display for InvalidMoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Invalid move: '{}'", self.name)
    }
}

impl std::error::Error for InvalidMoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_names() {
        let registry = MoveRegistry::new();

        assert_eq!(registry.resolve("Rock").unwrap(), MoveKind::Rock);
        assert_eq!(registry.resolve("PAPER").unwrap(), MoveKind::Paper);
        assert_eq!(registry.resolve("  scissors ").unwrap(), MoveKind::Scissors);
        assert_eq!(registry.resolve("lizard").unwrap(), MoveKind::Lizard);
        assert_eq!(registry.resolve("Spock").unwrap(), MoveKind::Spock);
    }

    #[test]
    fn test_portuguese_names() {
        let registry = MoveRegistry::new();

        assert_eq!(registry.resolve("Pedra").unwrap(), MoveKind::Rock);
        assert_eq!(registry.resolve("papel").unwrap(), MoveKind::Paper);
        assert_eq!(registry.resolve("Tesoura").unwrap(), MoveKind::Scissors);
        assert_eq!(registry.resolve("LAGARTO").unwrap(), MoveKind::Lizard);
    }

    #[test]
    fn test_play_prefix() {
        let registry = MoveRegistry::new();

        assert_eq!(registry.resolve("JOGADA SPOCK").unwrap(), MoveKind::Spock);
        assert_eq!(registry.resolve("jogada   tesoura").unwrap(), MoveKind::Scissors);
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let registry = MoveRegistry::new();

        let err = registry.resolve("JOGADA INVALIDA").unwrap_err();
        assert_eq!(err.name, "JOGADA INVALIDA");

        assert!(registry.resolve("").is_err());
        assert!(registry.resolve("jogada").is_err());
        assert!(registry.resolve("rockpaper").is_err());
    }

    #[test]
    fn test_accepted_names() {
        let names = MoveRegistry::new().accepted_names();

        assert_eq!(names.len(), 9);
        assert!(names.contains(&"tesoura"));
        assert!(names.iter().all(|n| *n == n.to_lowercase()));
    }

    #[test]
    fn test_every_kind_has_a_name() {
        let registry = MoveRegistry::new();

        for &kind in MoveKind::kinds() {
            let names = registry.names_for(kind);
            assert!(!names.is_empty(), "{} has no accepted name", kind);
            for name in names {
                assert_eq!(registry.resolve(name).unwrap(), kind);
            }
        }
    }
}
