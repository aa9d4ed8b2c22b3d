//! cfa CLI - Confluence actions.
//!
//! Provides commands for:
//! - `actions`: List the available actions
//! - `run`: Invoke one action with a JSON payload and print the JSON result

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ActionsArgs, RunArgs};
use output::Output;

/// cfa - Confluence actions.
#[derive(Parser)]
#[command(name = "cfa", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available actions.
    Actions(ActionsArgs),
    /// Run an action.
    Run(RunArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Actions(args) => args.execute(),
        Commands::Run(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
