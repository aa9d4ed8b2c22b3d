//! CLI error types.

use cfa_config::ConfigError;
use cfa_confluence::ConfluenceError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{}", .0.detailed_message())]
    Confluence(#[from] ConfluenceError),

    #[error("invalid JSON payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("action {0} failed")]
    ActionFailed(String),
}
