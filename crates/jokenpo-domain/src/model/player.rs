//! Player - Someone who can sit at a game
//!
//! Player is an Entity (has identity). Sign-up and credentials live
//! outside the engine; games only ever hold a [`PlayerId`].

/// Unique identifier for a Player
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player - A registered participant
#[derive(Debug, Clone)]
pub struct Player {
    /// Unique identifier (Entity identity)
    id: PlayerId,
    /// Login name
    username: String,
    /// Display name
    name: String,
}

impl Player {
    /// Create a new Player. The username defaults to the id.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            username: id.as_str().to_string(),
            id,
            name: name.into(),
        }
    }

    /// Builder: set the login name
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Player {}
