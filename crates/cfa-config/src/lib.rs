//! Configuration management for cfa.
//!
//! Parses `cfa.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Fields missing from
//! the file fall back to the process environment:
//!
//! - `confluence.base_url` - `CONFLUENCE_BASE_URL`
//! - `confluence.email` - `CONFLUENCE_EMAIL`
//! - `confluence.api_token` - `JIRA_API_TOKEN`
//!
//! CLI settings can be applied during load via [`CliSettings`] and take
//! precedence over both.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "cfa.toml";

/// Environment variable holding the Confluence account email.
pub const ENV_EMAIL: &str = "CONFLUENCE_EMAIL";
/// Environment variable holding the Confluence site URL.
pub const ENV_BASE_URL: &str = "CONFLUENCE_BASE_URL";
/// Environment variable holding the API token.
///
/// Atlassian API tokens are shared between Jira and Confluence, so the Jira
/// secret name is reused.
pub const ENV_API_TOKEN: &str = "JIRA_API_TOKEN";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override Confluence base URL.
    pub base_url: Option<String>,
    /// Override account email.
    pub email: Option<String>,
}

/// Application configuration as loaded from `cfa.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Confluence section. Every field is optional in the file.
    confluence: ConfluenceSection,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw `[confluence]` section as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfluenceSection {
    base_url: Option<String>,
    email: Option<String>,
    api_token: Option<String>,
    timeout_secs: Option<u64>,
}

/// Resolved Confluence connection settings.
///
/// Built once and handed to the HTTP transport at construction time.
#[derive(Clone, PartialEq, Eq)]
pub struct ConfluenceConfig {
    /// Confluence site URL, e.g. `https://example.atlassian.net`.
    pub base_url: String,
    /// Account email used as the Basic auth user.
    pub email: String,
    /// API token used as the Basic auth password.
    pub api_token: String,
    /// Global request timeout. `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl ConfluenceConfig {
    /// Create a config with the HTTP client's default timeout.
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            email: email.into(),
            api_token: api_token.into(),
            timeout: None,
        }
    }

    /// Set a global request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve settings from the process environment only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::default().require_confluence()
    }

    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "confluence.base_url")?;
        require_http_url(&self.base_url, "confluence.base_url")?;
        require_non_empty(&self.email, "confluence.email")?;
        require_non_empty(&self.api_token, "confluence.api_token")?;
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::Validation(
                "confluence.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ConfluenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfluenceConfig")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`confluence.api_token`").
        field: String,
        /// Error message (e.g., "${`JIRA_API_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Pick the file value, else the environment value, else fail.
fn resolve_field(
    value: Option<&String>,
    lookup: &impl Fn(&str) -> Option<String>,
    env_var: &str,
    field: &str,
) -> Result<String, ConfigError> {
    value
        .cloned()
        .or_else(|| lookup(env_var).filter(|v| !v.is_empty()))
        .ok_or_else(|| {
            ConfigError::Validation(format!(
                "{field} is not set (add it to {CONFIG_FILENAME} or set {env_var})"
            ))
        })
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `cfa.toml` in current directory and parents,
    /// and falls back to an empty config when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.confluence.base_url = Some(base_url.clone());
        }
        if let Some(email) = &settings.email {
            self.confluence.email = Some(email.clone());
        }
    }

    /// Get validated Confluence settings.
    ///
    /// Fields absent from the file are read from `CONFLUENCE_BASE_URL`,
    /// `CONFLUENCE_EMAIL` and `JIRA_API_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a field is missing or invalid.
    pub fn require_confluence(&self) -> Result<ConfluenceConfig, ConfigError> {
        self.resolve_confluence(|name| std::env::var(name).ok())
    }

    fn resolve_confluence(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ConfluenceConfig, ConfigError> {
        let section = &self.confluence;
        let mut conf = ConfluenceConfig::new(
            resolve_field(
                section.base_url.as_ref(),
                &lookup,
                ENV_BASE_URL,
                "confluence.base_url",
            )?,
            resolve_field(
                section.email.as_ref(),
                &lookup,
                ENV_EMAIL,
                "confluence.email",
            )?,
            resolve_field(
                section.api_token.as_ref(),
                &lookup,
                ENV_API_TOKEN,
                "confluence.api_token",
            )?,
        );
        conf.timeout = section.timeout_secs.map(Duration::from_secs);
        conf.validate()?;
        Ok(conf)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let section = &mut self.confluence;
        if let Some(ref url) = section.base_url {
            section.base_url = Some(expand::expand_env(url, "confluence.base_url")?);
        }
        if let Some(ref email) = section.email {
            section.email = Some(expand::expand_env(email, "confluence.email")?);
        }
        if let Some(ref token) = section.api_token {
            section.api_token = Some(expand::expand_env(token, "confluence.api_token")?);
        }
        Ok(())
    }
}
