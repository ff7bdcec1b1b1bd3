//! jokenpo play command
//!
//! `jokenpo play ana=pedra bia=spock caio=lagarto`

use clap::Args;
use jokenpo_domain::model::player::{Player, PlayerId};

use crate::in_memory_service;
use crate::report::{print_json, GameReport};

#[derive(Debug, Args)]
pub struct PlayCommand {
    /// Moves as PLAYER=MOVE, in submission order (the first player creates the game)
    #[arg(required = true, num_args = 2.., value_parser = parse_play)]
    pub plays: Vec<Play>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    pub player: String,
    pub move_name: String,
}

pub fn parse_play(raw: &str) -> Result<Play, String> {
    match raw.split_once('=') {
        Some((player, move_name)) if !player.trim().is_empty() => Ok(Play {
            player: player.trim().to_string(),
            move_name: move_name.to_string(),
        }),
        _ => Err(format!("expected PLAYER=MOVE, got '{}'", raw)),
    }
}

impl PlayCommand {
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let service = in_memory_service();

        let mut participants = Vec::with_capacity(self.plays.len());
        for play in &self.plays {
            let id = PlayerId::new(play.player.as_str());
            service.register_player(Player::new(id.clone(), play.player.as_str()))?;
            participants.push(id);
        }

        let Some(creator) = participants.first().cloned() else {
            anyhow::bail!("at least one PLAYER=MOVE is required");
        };
        let mut game = service.create_game(&creator, participants)?;
        for play in &self.plays {
            game = service.submit_move(game.id(), &PlayerId::new(play.player.as_str()), &play.move_name)?;
        }

        let report = GameReport::from(&game);
        if json {
            print_json(&report)
        } else {
            report.print();
            Ok(())
        }
    }
}
