//! Configuration for `jokenpo simulate`
//!
//! ```json
//! {
//!   "logLevel": "debug",
//!   "players": [{ "id": "ana", "name": "Ana" }],
//!   "games": [{ "creator": "ana", "moves": [{ "player": "ana", "move": "Pedra" }] }]
//! }
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JokenpoConfig {
    /// Default tracing filter, `RUST_LOG` still wins
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub players: Vec<PlayerConfig>,

    #[serde(default)]
    pub games: Vec<GameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    pub id: String,

    /// Display name, defaults to the id
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Defaults to the first player listed in `moves`
    #[serde(default)]
    pub creator: Option<String>,

    /// One entry per participant; the participant list is taken from here
    pub moves: Vec<MoveConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveConfig {
    pub player: String,
    #[serde(rename = "move")]
    pub move_name: String,
}

impl JokenpoConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }
}

impl GameConfig {
    pub fn participants(&self) -> Vec<&str> {
        self.moves.iter().map(|m| m.player.as_str()).collect()
    }

    pub fn creator(&self) -> Option<&str> {
        self.creator
            .as_deref()
            .or_else(|| self.moves.first().map(|m| m.player.as_str()))
    }
}
