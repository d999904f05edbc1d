//! # PrognozRS Main Entry Point
//!
//! File: bot/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point for `prognoz`, a Telegram bot that answers match-name queries
//! ("Vitality vs FaZe") with a canned prediction card. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - `engine`: pure prediction logic (normalization, fixture table, lookup, cards)
//! - `chat`: how a chat message maps to a reply (menu, canned texts, router)
//! - `commands`: `run` (Telegram), plus the offline `predict`, `fixtures` and `chat`
//! - `core`: configuration and error types
//!
//! ## Examples
//!
//! ```bash
//! # Start the bot
//! BOT_TOKEN=123456:ABC-DEF... prognoz run
//!
//! # Try the lookup offline, with debug logging
//! prognoz -vv predict "FaZe vs Vitality"
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod chat; // Message routing and canned replies
mod commands; // Command handlers (run, predict, fixtures, chat)
mod core; // Configuration and errors
mod engine; // Prediction lookup

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "prognoz",
    about = "⚽🎮 PrognozRS: Telegram bot with canned match predictions",
    long_about = "Answers match-name queries such as 'Vitality vs FaZe' with a prediction card.\n\
                  Run it against Telegram with `prognoz run`, or try it offline with\n\
                  `prognoz predict`, `prognoz fixtures` and `prognoz chat`.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Connect to Telegram and answer messages until Ctrl-C.
    #[command(alias = "r")]
    Run(commands::run::RunArgs),
    /// Print the prediction card for a match name.
    #[command(alias = "p")]
    Predict(commands::predict::PredictArgs),
    /// List the known fixtures.
    #[command(alias = "f")]
    Fixtures(commands::fixtures::FixturesArgs),
    /// Chat with the bot in the terminal.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Run(args) => commands::run::handle_run(args).await,
        Commands::Predict(args) => commands::predict::handle_predict(args).await,
        Commands::Fixtures(args) => commands::fixtures::handle_fixtures(args).await,
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
