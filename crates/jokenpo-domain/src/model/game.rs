//! GameSession - One match between a fixed set of players
//!
//! A GameSession is an Entity and the aggregate root of a match: it owns
//! every PlayerMove submitted to it. It is Open until the last participant
//! has played, then Finished with its Resolution recorded for good.

use super::move_kind::MoveKind;
use super::player::PlayerId;
use super::player_move::PlayerMove;
use super::timestamp::Timestamp;
use crate::service::resolution::{resolve, Resolution};

/// Unique identifier for a GameSession
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for GameId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The current status of a GameSession
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for moves
    Open,
    /// Every participant has played
    Finished { resolution: Resolution },
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAccepted {
    /// The move that was recorded
    pub player_move: PlayerMove,
    /// Set when this move was the last one and the game got resolved
    pub resolution: Option<Resolution>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    /// Unique identifier (Entity identity)
    id: GameId,
    /// Who opened the game
    creator: PlayerId,
    /// Fixed at creation, no duplicates
    participants: Vec<PlayerId>,
    created_at: Timestamp,
    status: GameStatus,
    /// In submission order
    moves: Vec<PlayerMove>,
}

impl GameSession {
    /// Open a new game.
    ///
    /// Needs at least two participants and rejects duplicates.
    pub fn create(
        id: GameId,
        creator: PlayerId,
        participants: Vec<PlayerId>,
        created_at: Timestamp,
    ) -> Result<Self, GameError> {
        Self::validate_participants(&participants)?;

        Ok(Self {
            id,
            creator,
            participants,
            created_at,
            status: GameStatus::Open,
            moves: Vec::new(),
        })
    }

    /// Check a participant list: at least two players, none repeated
    pub fn validate_participants(participants: &[PlayerId]) -> Result<(), GameError> {
        if participants.len() < 2 {
            return Err(GameError::InvalidGame(InvalidGameReason::TooFewParticipants {
                count: participants.len(),
            }));
        }

        for (i, player) in participants.iter().enumerate() {
            if participants[..i].contains(player) {
                return Err(GameError::InvalidGame(
                    InvalidGameReason::DuplicateParticipant {
                        player_id: player.as_str().to_string(),
                    },
                ));
            }
        }

        Ok(())
    }

    // ========== Getters ==========

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn creator(&self) -> &PlayerId {
        &self.creator
    }

    pub fn participants(&self) -> &[PlayerId] {
        &self.participants
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn moves(&self) -> &[PlayerMove] {
        &self.moves
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        match &self.status {
            GameStatus::Open => None,
            GameStatus::Finished { resolution } => Some(resolution),
        }
    }

    /// The sole winner, if there is one.
    ///
    /// `None` while open, on a tie, and on a shared win.
    pub fn winner(&self) -> Option<&PlayerId> {
        self.resolution().and_then(Resolution::winner)
    }

    /// Everyone holding the winning move. Empty while open or on a tie.
    pub fn winners(&self) -> &[PlayerId] {
        self.resolution().map(Resolution::winners).unwrap_or(&[])
    }

    pub fn has_participant(&self, player_id: &PlayerId) -> bool {
        self.participants.contains(player_id)
    }

    pub fn move_of(&self, player_id: &PlayerId) -> Option<&PlayerMove> {
        self.moves.iter().find(|m| m.player_id() == player_id)
    }

    /// Participants who have not played yet
    pub fn pending_players(&self) -> Vec<&PlayerId> {
        self.participants
            .iter()
            .filter(|p| self.move_of(p).is_none())
            .collect()
    }

    // ========== State Transitions ==========

    /// Record a participant's move.
    ///
    /// The move that completes the game resolves it before returning.
    /// A rejected move leaves the session untouched.
    pub fn submit_move(
        &mut self,
        player_id: &PlayerId,
        kind: MoveKind,
        submitted_at: Timestamp,
    ) -> Result<MoveAccepted, GameError> {
        if self.is_finished() {
            return Err(GameError::GameAlreadyFinished {
                game_id: self.id.as_str().to_string(),
            });
        }
        if !self.has_participant(player_id) {
            return Err(GameError::NotAParticipant {
                game_id: self.id.as_str().to_string(),
                player_id: player_id.as_str().to_string(),
            });
        }
        if self.move_of(player_id).is_some() {
            return Err(GameError::DuplicateMove {
                game_id: self.id.as_str().to_string(),
                player_id: player_id.as_str().to_string(),
            });
        }

        let player_move = PlayerMove::new(
            self.id.clone(),
            player_id.clone(),
            kind,
            self.moves.len() + 1,
            submitted_at,
        );
        self.moves.push(player_move.clone());

        let resolution = if self.moves.len() == self.participants.len() {
            let resolution = resolve(&self.moves);
            self.status = GameStatus::Finished {
                resolution: resolution.clone(),
            };
            Some(resolution)
        } else {
            None
        };

        Ok(MoveAccepted {
            player_move,
            resolution,
        })
    }
}

/// Why a participant list was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGameReason {
    TooFewParticipants { count: usize },
    DuplicateParticipant { player_id: String },
}

impl core::fmt::Display for InvalidGameReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvalidGameReason::TooFewParticipants { count } => {
                write!(f, "a game needs at least 2 players, got {}", count)
            }
            InvalidGameReason::DuplicateParticipant { player_id } => {
                write!(f, "player {} is listed more than once", player_id)
            }
        }
    }
}

/// Errors that can occur during GameSession operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidGame(InvalidGameReason),
    NotAParticipant { game_id: String, player_id: String },
    DuplicateMove { game_id: String, player_id: String },
    GameAlreadyFinished { game_id: String },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidGame(reason) => write!(f, "Invalid game: {}", reason),
            GameError::NotAParticipant { game_id, player_id } => {
                write!(f, "Player {} is not part of game {}", player_id, game_id)
            }
            GameError::DuplicateMove { game_id, player_id } => {
                write!(f, "Player {} already played in game {}", player_id, game_id)
            }
            GameError::GameAlreadyFinished { game_id } => {
                write!(f, "Game {} is already finished", game_id)
            }
        }
    }
}

impl std::error::Error for GameError {}
