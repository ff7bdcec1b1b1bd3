//! GameService - The caller-facing operations
//!
//! ```text
//! create_game ──► GameSession::create ──► GameRepository::save
//!
//! submit_move ──► [per-game lock]
//!                   load ─► MoveRegistry::resolve ─► GameSession::submit_move
//!                   ─► MoveRepository::append ─► GameRepository::save
//!                 [unlock]
//! ```
//!
//! The caller's identity is always an explicit argument. There is no
//! ambient "current user".

use chrono::Utc;
use jokenpo_domain::model::game::{GameId, GameSession};
use jokenpo_domain::model::move_kind::MoveKind;
use jokenpo_domain::model::player::{Player, PlayerId};
use jokenpo_domain::model::player_move::PlayerMove;
use jokenpo_domain::model::timestamp::Timestamp;
use jokenpo_domain::repository::game_repository::{GameRepository, RepositoryError};
use jokenpo_domain::repository::move_repository::MoveRepository;
use jokenpo_domain::repository::player_repository::PlayerRepository;
use jokenpo_domain::service::move_registry::MoveRegistry;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::{Entity, GameServiceError, Result};
use crate::locks::GameLocks;
use crate::ranking::{rank, RankingEntry};

pub struct GameService<G, M, P> {
    games: G,
    moves: M,
    players: P,
    registry: MoveRegistry,
    locks: GameLocks,
}

impl<G, M, P> GameService<G, M, P>
where
    G: GameRepository,
    M: MoveRepository,
    P: PlayerRepository,
{
    pub fn new(games: G, moves: M, players: P) -> Self {
        Self {
            games,
            moves,
            players,
            registry: MoveRegistry::new(),
            locks: GameLocks::new(),
        }
    }

    // ========== Players ==========

    pub fn register_player(&self, player: Player) -> Result<()> {
        info!(player_id = %player.id(), name = player.name(), "registering player");
        self.players.register(player)?;
        Ok(())
    }

    // ========== Games ==========

    /// Open a game between `participants`, on behalf of `creator`.
    ///
    /// The creator and every participant must be registered players.
    pub fn create_game(
        &self,
        creator: &PlayerId,
        participants: Vec<PlayerId>,
    ) -> Result<GameSession> {
        GameSession::validate_participants(&participants)
            .inspect_err(|e| warn!(creator = %creator, error = %e, "game rejected"))?;
        self.ensure_player(creator)?;
        for participant in &participants {
            self.ensure_player(participant)?;
        }

        let game_id = GameId::new(Uuid::new_v4().to_string());
        let game = GameSession::create(game_id, creator.clone(), participants, now())
            .inspect_err(|e| warn!(creator = %creator, error = %e, "game rejected"))?;

        self.games.save(&game)?;
        info!(
            game_id = %game.id(),
            creator = %creator,
            participants = game.participants().len(),
            "game created"
        );
        Ok(game)
    }

    /// Submit `player_id`'s move to a game.
    ///
    /// Returns the session as it stands after the move, finished and
    /// resolved if this was the last one missing.
    pub fn submit_move(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        move_name: &str,
    ) -> Result<GameSession> {
        // Games are never deleted, so an id seen here stays valid under the lock.
        if !self.games.exists(game_id)? {
            warn!(game_id = %game_id, player_id = %player_id, "move for unknown game");
            return Err(GameServiceError::NotFound {
                entity: Entity::Game,
                id: game_id.as_str().to_string(),
            });
        }

        let result = self.locks.with_lock(game_id, || {
            debug!(game_id = %game_id, player_id = %player_id, "game lock acquired");
            self.submit_move_locked(game_id, player_id, move_name)
        });

        match &result {
            Ok(game) if game.is_finished() => self.locks.release(game_id),
            Err(GameServiceError::GameAlreadyFinished { .. }) => self.locks.release(game_id),
            _ => {}
        }
        result
    }

    fn submit_move_locked(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        move_name: &str,
    ) -> Result<GameSession> {
        let mut game = self.load_game(game_id)?;

        let kind = self.registry.resolve(move_name).inspect_err(|e| {
            warn!(game_id = %game_id, player_id = %player_id, error = %e, "move rejected")
        })?;

        let accepted = game.submit_move(player_id, kind, now()).inspect_err(|e| {
            warn!(game_id = %game_id, player_id = %player_id, error = %e, "move rejected")
        })?;

        self.moves.append(&accepted.player_move).inspect_err(|e| {
            error!(game_id = %game_id, player_id = %player_id, error = %e, "failed to append move")
        })?;
        self.games.save(&game).inspect_err(|e| {
            // The move log is now ahead of the stored session.
            error!(game_id = %game_id, player_id = %player_id, error = %e, "failed to save game after appending move")
        })?;

        info!(
            game_id = %game_id,
            player_id = %player_id,
            kind = %kind,
            sequence = accepted.player_move.sequence(),
            "move accepted"
        );
        if let Some(resolution) = &accepted.resolution {
            info!(game_id = %game_id, outcome = %resolution, "game finished");
        }

        Ok(game)
    }

    pub fn get_game(&self, game_id: &GameId) -> Result<GameSession> {
        self.load_game(game_id)
    }

    pub fn list_games(&self) -> Result<Vec<GameSession>> {
        Ok(self.games.list_all()?)
    }

    /// Moves recorded for a game, in submission order
    pub fn moves_of(&self, game_id: &GameId) -> Result<Vec<PlayerMove>> {
        self.load_game(game_id)?;
        Ok(self.moves.list_by_game(game_id)?)
    }

    // ========== Move catalog ==========

    pub fn list_moves(&self) -> &'static [MoveKind] {
        MoveKind::kinds()
    }

    pub fn find_move(&self, name: &str) -> Result<MoveKind> {
        Ok(self.registry.resolve(name)?)
    }

    // ========== Ranking ==========

    pub fn ranking(&self) -> Result<Vec<RankingEntry>> {
        let finished = self.games.list_finished()?;
        Ok(rank(&finished))
    }

    // ========== Helpers ==========

    fn load_game(&self, game_id: &GameId) -> Result<GameSession> {
        self.games.load(game_id).map_err(|e| match e {
            RepositoryError::NotFound { id } => GameServiceError::NotFound {
                entity: Entity::Game,
                id,
            },
            other => GameServiceError::Storage(other),
        })
    }

    fn ensure_player(&self, player_id: &PlayerId) -> Result<()> {
        match self.players.find_by_id(player_id)? {
            Some(_) => Ok(()),
            None => Err(GameServiceError::NotFound {
                entity: Entity::Player,
                id: player_id.as_str().to_string(),
            }),
        }
    }
}

fn now() -> Timestamp {
    Timestamp::from_millis(Utc::now().timestamp_millis())
}
