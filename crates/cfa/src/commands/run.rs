//! `cfa run` command implementation.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use cfa_config::{CliSettings, Config};
use cfa_confluence::{Action, ConfluenceClient, dispatch};
use clap::Args;
use serde_json::Value;
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the run command.
#[derive(Args)]
pub(crate) struct RunArgs {
    /// Action name (see `cfa actions`).
    action: String,

    /// JSON payload for the action.
    #[arg(short, long, conflicts_with = "payload_file")]
    payload: Option<String>,

    /// Read the JSON payload from a file (`-` for stdin).
    #[arg(long)]
    payload_file: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover cfa.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Confluence base URL (overrides config and CONFLUENCE_BASE_URL).
    #[arg(short = 'u', long)]
    base_url: Option<String>,

    /// Account email (overrides config and CONFLUENCE_EMAIL).
    #[arg(long)]
    email: Option<String>,
}

impl RunArgs {
    /// Execute the run command.
    ///
    /// The action response is always printed to stdout; an error response
    /// also fails the command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let action: Action = self.action.parse()?;
        let payload = self.read_payload()?;
        if !action.takes_payload() && !payload.is_null() {
            output.warning(&format!("{action} takes no payload; ignoring it"));
        }

        let cli_settings = CliSettings {
            base_url: self.base_url,
            email: self.email,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        info!("Loaded configuration from {}", config_source(&config));
        let confluence = config.require_confluence()?;
        info!("Confluence base URL: {}", confluence.base_url);
        let client = ConfluenceClient::from_config(&confluence)?;

        let response = dispatch(&client, action, payload);
        output.json(&serde_json::to_value(&response)?)?;

        if response.is_success() {
            output.success(&format!("{action} succeeded"));
            Ok(())
        } else {
            Err(CliError::ActionFailed(action.to_string()))
        }
    }

    fn read_payload(&self) -> Result<Value, CliError> {
        match (&self.payload, &self.payload_file) {
            (Some(text), _) => parse_payload(text),
            (None, Some(path)) => parse_payload(&read_payload_file(path)?),
            (None, None) => Ok(Value::Null),
        }
    }
}

fn read_payload_file(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Where the configuration came from, for logging.
fn config_source(config: &Config) -> String {
    config.config_path.as_ref().map_or_else(
        || "environment and command-line flags".to_owned(),
        |path| path.display().to_string(),
    )
}

/// Parse a JSON payload; blank input means no payload.
fn parse_payload(text: &str) -> Result<Value, CliError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}
