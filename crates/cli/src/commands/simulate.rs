//! jokenpo simulate command
//!
//! Plays every game of a config file. Each game's moves are submitted
//! concurrently from blocking tasks; the service's per-game lock decides
//! the order they land in.

use anyhow::Context;
use clap::Args;
use jokenpo_domain::model::game::GameSession;
use jokenpo_domain::model::player::{Player, PlayerId};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::JokenpoConfig;
use crate::report::{print_json, print_ranking, GameReport, RankingReport};
use crate::{in_memory_service, InMemoryGameService};

#[derive(Debug, Args)]
pub struct SimulateCommand {
    /// Path to a JSON config with players and games
    #[arg(short, long)]
    pub config: PathBuf,
}

#[derive(Debug, serde::Serialize)]
struct SimulationReport {
    games: Vec<GameReport>,
    ranking: Vec<RankingReport>,
}

impl SimulateCommand {
    pub fn load_config(&self) -> anyhow::Result<JokenpoConfig> {
        JokenpoConfig::from_file(&self.config)
    }

    pub async fn run(&self, config: JokenpoConfig, json: bool) -> anyhow::Result<()> {
        let service = Arc::new(in_memory_service());

        for player in &config.players {
            let mut entry = Player::new(
                PlayerId::new(player.id.as_str()),
                player.name.as_deref().unwrap_or(&player.id),
            );
            if let Some(username) = &player.username {
                entry = entry.with_username(username.as_str());
            }
            service.register_player(entry)?;
        }

        let mut games = Vec::with_capacity(config.games.len());
        for (index, game_config) in config.games.iter().enumerate() {
            let creator = game_config
                .creator()
                .with_context(|| format!("game #{} has no moves", index + 1))?;
            let participants = game_config
                .participants()
                .into_iter()
                .map(PlayerId::new)
                .collect();
            let game = service
                .create_game(&PlayerId::new(creator), participants)
                .with_context(|| format!("failed to create game #{}", index + 1))?;

            let handles: Vec<JoinHandle<_>> = game_config
                .moves
                .iter()
                .map(|m| {
                    let service = Arc::clone(&service);
                    let game_id = game.id().clone();
                    let player_id = PlayerId::new(m.player.as_str());
                    let move_name = m.move_name.clone();
                    tokio::task::spawn_blocking(move || {
                        service.submit_move(&game_id, &player_id, &move_name)
                    })
                })
                .collect();

            for handle in handles {
                handle
                    .await
                    .context("move submission task panicked")?
                    .with_context(|| format!("game #{} rejected a move", index + 1))?;
            }

            let finished = service.get_game(game.id())?;
            info!(game_id = %finished.id(), finished = finished.is_finished(), "simulated game");
            games.push(finished);
        }

        report(&service, &games, json)
    }
}

fn report(service: &InMemoryGameService, games: &[GameSession], json: bool) -> anyhow::Result<()> {
    let ranking: Vec<RankingReport> = service.ranking()?.iter().map(RankingReport::from).collect();
    let games: Vec<GameReport> = games.iter().map(GameReport::from).collect();

    if json {
        return print_json(&SimulationReport { games, ranking });
    }

    for game in &games {
        game.print();
    }
    println!();
    print_ranking(&ranking);
    Ok(())
}
