//! jokenpo moves command

use clap::Args;
use console::style;
use jokenpo_domain::model::move_kind::MoveKind;
use jokenpo_domain::service::move_registry::MoveRegistry;
use serde::Serialize;

use crate::report::print_json;

#[derive(Debug, Args)]
pub struct MovesCommand {}

#[derive(Debug, Serialize)]
struct MoveEntry {
    name: &'static str,
    beats: Vec<&'static str>,
    accepts: Vec<&'static str>,
}

impl MovesCommand {
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let registry = MoveRegistry::new();
        let entries: Vec<MoveEntry> = MoveKind::kinds()
            .iter()
            .map(|kind| MoveEntry {
                name: kind.display_name(),
                beats: kind.beats().iter().map(MoveKind::display_name).collect(),
                accepts: registry.names_for(*kind),
            })
            .collect();

        if json {
            return print_json(&entries);
        }

        println!("{}", style("Moves").bold());
        for entry in &entries {
            println!(
                "  {:<9} beats {:<18} (accepts: {})",
                style(entry.name).cyan(),
                entry.beats.join(", "),
                entry.accepts.join(", ")
            );
        }
        println!("  Any name may be prefixed with \"jogada\".");
        Ok(())
    }
}
