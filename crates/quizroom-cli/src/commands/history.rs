use clap::Subcommand;
use quizroom_core::summary::newest_first;
use quizroom_core::{HistoryStore, HistorySummary, SqliteHistory};

use crate::render;

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List past attempts, newest first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Attempt count, best and latest score
    Stats,
    /// Delete all recorded attempts
    Clear,
}

pub fn run(action: HistoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut history = SqliteHistory::open_default()?;

    match action {
        HistoryAction::List { json } => {
            let records = newest_first(&history.list_all()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print!("{}", render::attempts(&records));
            }
        }
        HistoryAction::Stats => {
            let summary = HistorySummary::from_records(&history.list_all()?);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        HistoryAction::Clear => {
            history.clear_all()?;
            println!("history cleared");
        }
    }
    Ok(())
}
