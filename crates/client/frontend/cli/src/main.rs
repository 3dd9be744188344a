//! Scorekeeper binary.
//!
//! Main entry point for the quiz-show scorekeeper.
//!
//! # Examples
//!
//! ```bash
//! # Interactive terminal UI (default)
//! cargo run -p scorekeeper-cli
//!
//! # Headless: commands on stdin, JSON snapshots on stdout
//! printf 'select 400\ncorrect\n' | cargo run -p scorekeeper-cli -- script
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use scorekeeper_cli::{CliApp, CliConfig, FrontendConfig, ScriptApp, logging};
use scorekeeper_frontend_core::frontend::FrontendApp;

#[derive(Parser, Debug)]
#[command(name = "scorekeeper", version, about = "Quiz-show scorekeeping aid")]
struct Cli {
    #[command(subcommand)]
    frontend: Option<Frontend>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Frontend {
    /// Interactive terminal UI
    Tui,
    /// Read one command per line from stdin and print JSON snapshots
    Script,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    match cli.frontend.unwrap_or(Frontend::Tui) {
        Frontend::Tui => {
            // stderr belongs to the terminal UI; log to a session file instead.
            let _guard = logging::setup_file_logging(&cli_config.logging)?;
            tracing::info!("Starting scorekeeper terminal UI");
            CliApp::new(frontend_config, cli_config).run().await
        }
        Frontend::Script => {
            logging::setup_stderr_logging();
            tracing::debug!("Starting scorekeeper script frontend");
            ScriptApp::stdio().run().await
        }
    }
}
