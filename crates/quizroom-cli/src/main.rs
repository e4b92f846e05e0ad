use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod countdown;
mod render;

#[derive(Parser)]
#[command(name = "quizroom", version, about = "Timed quiz in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz interactively
    Play(commands::play::PlayArgs),
    /// Past attempts
    History {
        #[command(subcommand)]
        action: commands::history::HistoryAction,
    },
    /// Question bank inspection
    Bank {
        #[command(subcommand)]
        action: commands::bank::BankAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUIZROOM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Play(args) => commands::play::run(args),
        Commands::History { action } => commands::history::run(action),
        Commands::Bank { action } => commands::bank::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
