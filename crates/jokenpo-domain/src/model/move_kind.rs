//! MoveKind - The five throws and who beats whom
//!
//! MoveKind is a Value Object: the set is closed and known at compile time.
//! Every kind beats exactly two others and loses to exactly two others,
//! so two different kinds never draw.

/// One of the five moves of rock-paper-scissors-lizard-spock
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveKind {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl MoveKind {
    /// All five kinds, in catalog order
    pub fn kinds() -> &'static [MoveKind] {
        &[
            MoveKind::Rock,
            MoveKind::Paper,
            MoveKind::Scissors,
            MoveKind::Lizard,
            MoveKind::Spock,
        ]
    }

    /// The two kinds this move defeats
    pub fn beats(&self) -> [MoveKind; 2] {
        match self {
            MoveKind::Rock => [MoveKind::Scissors, MoveKind::Lizard],
            MoveKind::Paper => [MoveKind::Rock, MoveKind::Spock],
            MoveKind::Scissors => [MoveKind::Paper, MoveKind::Lizard],
            MoveKind::Lizard => [MoveKind::Paper, MoveKind::Spock],
            MoveKind::Spock => [MoveKind::Rock, MoveKind::Scissors],
        }
    }

    /// Whether `self` beats `other`
    pub fn dominates(&self, other: MoveKind) -> bool {
        self.beats().contains(&other)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MoveKind::Rock => "Rock",
            MoveKind::Paper => "Paper",
            MoveKind::Scissors => "Scissors",
            MoveKind::Lizard => "Lizard",
            MoveKind::Spock => "Spock",
        }
    }

    /// Name used by Portuguese-speaking players ("jokenpô")
    pub fn portuguese_name(&self) -> &'static str {
        match self {
            MoveKind::Rock => "Pedra",
            MoveKind::Paper => "Papel",
            MoveKind::Scissors => "Tesoura",
            MoveKind::Lizard => "Lagarto",
            MoveKind::Spock => "Spock",
        }
    }
}

impl core::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
