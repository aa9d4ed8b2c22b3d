//! Error types for Confluence actions.

use std::error::Error;

use cfa_config::ConfigError;

/// Error from Confluence API operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfluenceError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned a non-2xx status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// Missing or invalid connection settings.
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Required request field missing or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Action name not in the action table.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// Server answered without a body where a record was expected.
    #[error("empty response for {0}")]
    MissingBody(&'static str),
}

impl ConfluenceError {
    /// Stable snake_case identifier for the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HttpRequest(_) => "http_request",
            Self::HttpResponse { .. } => "http_response",
            Self::Json(_) => "json",
            Self::Config(_) => "configuration",
            Self::Validation(_) => "validation",
            Self::UnknownAction(_) => "unknown_action",
            Self::MissingBody(_) => "missing_body",
        }
    }

    /// HTTP status code, for errors the server answered.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::HttpResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Display message followed by every source in the chain.
    pub fn detailed_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }
}
