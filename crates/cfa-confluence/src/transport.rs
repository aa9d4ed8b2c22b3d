//! HTTP transport for the Confluence REST API.
//!
//! [`Transport`] is the seam between actions and the network: actions build
//! an endpoint path and optional JSON body, the transport adds the site URL
//! and credentials. [`HttpTransport`] is the `ureq` implementation.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cfa_config::ConfluenceConfig;
use serde_json::Value;
use tracing::{info, warn};
use ureq::Agent;

use crate::error::ConfluenceError;

/// HTTP method used by actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated request/response round trip against a Confluence site.
pub trait Transport {
    /// Send one request to `endpoint` (path and query, relative to the site URL).
    ///
    /// Returns `Ok(None)` for `204 No Content`, the parsed JSON body for any
    /// other 2xx status.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::HttpResponse`] for a status outside 200-299
    /// and [`ConfluenceError::HttpRequest`] when the request could not be
    /// sent or the body could not be read.
    fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, ConfluenceError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, ConfluenceError> {
        (**self).request(method, endpoint, body)
    }
}

/// Build the `Authorization` header value for HTTP Basic auth.
pub fn basic_auth_header(email: &str, api_token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{api_token}")))
}

/// `ureq`-backed transport with Basic auth.
pub struct HttpTransport {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl HttpTransport {
    /// Create a transport from validated connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::Config`] if the settings are invalid.
    pub fn new(config: &ConfluenceConfig) -> Result<Self, ConfluenceError> {
        config.validate()?;

        let mut builder = Agent::config_builder().http_status_as_error(false);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout_global(Some(timeout));
        }

        Ok(Self {
            agent: builder.build().into(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            auth_header: basic_auth_header(&config.email, &config.api_token),
        })
    }

    /// Site URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Transport for HttpTransport {
    fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, ConfluenceError> {
        let url = format!("{}{}", self.base_url, endpoint);

        info!("{} {}", method, endpoint);

        let response = match (method, body) {
            (Method::Get, _) => self
                .agent
                .get(&url)
                .header("Authorization", &self.auth_header)
                .header("Accept", "application/json")
                .call()?,
            (Method::Post, Some(body)) => self
                .agent
                .post(&url)
                .header("Authorization", &self.auth_header)
                .header("Accept", "application/json")
                .send_json(body)?,
            (Method::Post, None) => self
                .agent
                .post(&url)
                .header("Authorization", &self.auth_header)
                .header("Accept", "application/json")
                .send_empty()?,
        };

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if !(200..300).contains(&status) {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            warn!("{} {} returned HTTP {}", method, endpoint, status);
            return Err(ConfluenceError::HttpResponse {
                status,
                body: error_body,
            });
        }

        if status == 204 {
            return Ok(None);
        }

        // Undecodable bodies map to `ConfluenceError::Json`.
        let text = body_reader.read_to_string()?;
        Ok(Some(serde_json::from_str(&text)?))
    }
}
