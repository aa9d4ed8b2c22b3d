//! Confluence REST API client.
//!
//! [`ConfluenceClient`] implements every action as a typed method on top of
//! a [`Transport`]. REST v1 lives under `/wiki/rest/api`, v2 under
//! `/wiki/api/v2`.

mod content;
mod pages;
mod spaces;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use cfa_config::ConfluenceConfig;

use crate::error::ConfluenceError;
use crate::transport::{HttpTransport, Method, Transport};

/// REST v1 path prefix.
const API_V1: &str = "/wiki/rest/api";
/// REST v2 path prefix.
const API_V2: &str = "/wiki/api/v2";

/// Characters escaped inside a single path segment (RFC 3986 unreserved are kept).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Confluence REST API client.
pub struct ConfluenceClient<T = HttpTransport> {
    transport: T,
}

impl ConfluenceClient<HttpTransport> {
    /// Create a client backed by [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::Config`] if the settings are invalid.
    pub fn from_config(config: &ConfluenceConfig) -> Result<Self, ConfluenceError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> ConfluenceClient<T> {
    /// Create a client over any transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET `endpoint` and decode the body as `R`.
    fn get_json<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        what: &'static str,
    ) -> Result<R, ConfluenceError> {
        let value = self
            .transport
            .request(Method::Get, endpoint, None)?
            .ok_or(ConfluenceError::MissingBody(what))?;
        Ok(serde_json::from_value(value)?)
    }

    /// POST `body` as JSON to `endpoint` and decode the response as `R`.
    fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        what: &'static str,
    ) -> Result<R, ConfluenceError> {
        let body = serde_json::to_value(body)?;
        let value = self
            .transport
            .request(Method::Post, endpoint, Some(&body))?
            .ok_or(ConfluenceError::MissingBody(what))?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Reject empty or whitespace-only required fields.
fn require(value: &str, field: &str) -> Result<(), ConfluenceError> {
    if value.trim().is_empty() {
        return Err(ConfluenceError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Escape a value for use as one URL path segment.
fn segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording transport with queued responses.

    use std::cell::RefCell;
    use std::collections::VecDeque;

    use serde_json::Value;

    use crate::error::ConfluenceError;
    use crate::transport::{Method, Transport};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Call {
        pub method: Method,
        pub endpoint: String,
        pub body: Option<Value>,
    }

    #[derive(Default)]
    pub(crate) struct MockTransport {
        responses: RefCell<VecDeque<Result<Option<Value>, ConfluenceError>>>,
        calls: RefCell<Vec<Call>>,
    }

    impl MockTransport {
        pub(crate) fn respond(self, response: Result<Option<Value>, ConfluenceError>) -> Self {
            self.responses.borrow_mut().push_back(response);
            self
        }

        pub(crate) fn ok(self, body: Value) -> Self {
            self.respond(Ok(Some(body)))
        }

        pub(crate) fn status(self, status: u16, body: &str) -> Self {
            self.respond(Err(ConfluenceError::HttpResponse {
                status,
                body: body.to_owned(),
            }))
        }

        pub(crate) fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl Transport for MockTransport {
        fn request(
            &self,
            method: Method,
            endpoint: &str,
            body: Option<&Value>,
        ) -> Result<Option<Value>, ConfluenceError> {
            self.calls.borrow_mut().push(Call {
                method,
                endpoint: endpoint.to_owned(),
                body: body.cloned(),
            });
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("unexpected request: no queued response")
        }
    }
}
