//! Printable views of games and rankings (text or JSON)

use console::style;
use jokenpo_domain::model::game::GameSession;
use jokenpo_domain::service::resolution::Resolution;
use jokenpo_usecase::RankingEntry;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameReport {
    pub game_id: String,
    pub creator: String,
    pub participants: Vec<String>,
    pub moves: Vec<MoveReport>,
    pub finished: bool,
    /// "open", "tie", "winner" or "shared"
    pub outcome: &'static str,
    pub winners: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub player: String,
    #[serde(rename = "move")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport {
    pub player: String,
    pub wins: usize,
    pub shared_wins: usize,
}

impl From<&GameSession> for GameReport {
    fn from(game: &GameSession) -> Self {
        let outcome = match game.resolution() {
            None => "open",
            Some(Resolution::Tie) => "tie",
            Some(Resolution::Winner(_)) => "winner",
            Some(Resolution::SharedWin(_)) => "shared",
        };

        Self {
            game_id: game.id().to_string(),
            creator: game.creator().to_string(),
            participants: game.participants().iter().map(|p| p.to_string()).collect(),
            moves: game
                .moves()
                .iter()
                .map(|m| MoveReport {
                    player: m.player_id().to_string(),
                    kind: m.kind().to_string(),
                })
                .collect(),
            finished: game.is_finished(),
            outcome,
            winners: game.winners().iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl From<&RankingEntry> for RankingReport {
    fn from(entry: &RankingEntry) -> Self {
        Self {
            player: entry.player_id.to_string(),
            wins: entry.wins,
            shared_wins: entry.shared_wins,
        }
    }
}

impl GameReport {
    pub fn print(&self) {
        println!("{} {}", style("Game").bold(), style(&self.game_id).dim());
        for m in &self.moves {
            println!("  {:<12} {}", m.player, m.kind);
        }
        match self.outcome {
            "winner" | "shared" => println!(
                "  {} {}",
                style("✓ Winner:").green().bold(),
                self.winners.join(", ")
            ),
            "tie" => println!("  {}", style("= Tie").yellow()),
            _ => println!("  {}", style("… waiting for moves").dim()),
        }
    }
}

pub fn print_ranking(entries: &[RankingReport]) {
    println!("{}", style("Ranking").bold());
    if entries.is_empty() {
        println!("  (no wins yet)");
    }
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "  {}. {:<12} {} wins, {} shared",
            i + 1,
            entry.player,
            entry.wins,
            entry.shared_wins
        );
    }
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokenpo_domain::model::game::GameId;
    use jokenpo_domain::model::move_kind::MoveKind;
    use jokenpo_domain::model::player::PlayerId;
    use jokenpo_domain::model::timestamp::Timestamp;

    #[test]
    fn test_report_of_finished_game() {
        let mut game = GameSession::create(
            GameId::new("g-1"),
            PlayerId::new("ana"),
            vec![PlayerId::new("ana"), PlayerId::new("bia")],
            Timestamp::default(),
        )
        .unwrap();
        game.submit_move(&PlayerId::new("ana"), MoveKind::Scissors, Timestamp::default())
            .unwrap();
        game.submit_move(&PlayerId::new("bia"), MoveKind::Lizard, Timestamp::default())
            .unwrap();

        let report = GameReport::from(&game);

        assert!(report.finished);
        assert_eq!(report.outcome, "winner");
        assert_eq!(report.winners, vec!["ana"]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["gameId"], "g-1");
        assert_eq!(json["moves"][1]["move"], "Lizard");
    }
}
