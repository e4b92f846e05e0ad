use std::path::PathBuf;

use clap::Subcommand;
use quizroom_core::{Config, QuestionBank};

#[derive(Subcommand)]
pub enum BankAction {
    /// Print the active question bank as JSON
    Show {
        /// Bank file to show instead of the configured one
        path: Option<PathBuf>,
    },
    /// Check a bank file and report how many questions it holds
    Validate {
        /// Bank file (.json or .toml)
        path: PathBuf,
    },
}

pub fn run(action: BankAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BankAction::Show { path } => {
            let bank = match path {
                Some(path) => QuestionBank::load(&path)?,
                None => Config::load()?.question_bank()?,
            };
            println!("{}", serde_json::to_string_pretty(&bank)?);
        }
        BankAction::Validate { path } => {
            let bank = QuestionBank::load(&path)?;
            let choice = bank.iter().filter(|q| q.is_multiple_choice()).count();
            println!(
                "ok: {} questions ({} multiple-choice, {} integer)",
                bank.len(),
                choice,
                bank.len() - choice
            );
        }
    }
    Ok(())
}
