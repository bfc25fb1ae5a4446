//! Rewind - tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use rewind_core::{HistoryStore, SortOrder};
use rewind_tui::{Cli, Command, Settings, logging, script, tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load_or_default(&cli.config)?;
    if cli.descending {
        settings = settings.with_sort_order(SortOrder::Descending);
    }
    logging::init_tracing(&settings)?;

    match cli.command() {
        Command::Play => tui::run_tui(&settings),
        Command::Replay { script: tokens, json } => run_replay(&settings, &tokens, json),
    }
}

/// Apply a script and print the final game
#[instrument(skip(settings, tokens))]
fn run_replay(settings: &Settings, tokens: &[String], json: bool) -> Result<()> {
    let mut store = HistoryStore::with_sort_order(*settings.sort_order());
    let report = script::replay(&mut store, tokens)?;
    info!(
        moves = report.view.history_len - 1,
        rejected = report.rejected.len(),
        "Replay finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", script::format_report(&report));
    }
    Ok(())
}
