//! Named actions and JSON dispatch.
//!
//! Hosts invoke an [`Action`] with a JSON payload through [`dispatch`] and
//! always get an [`ActionResponse`] back, either the serialized result or a
//! structured error. Every action follows the same error contract.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::client::ConfluenceClient;
use crate::error::ConfluenceError;
use crate::transport::Transport;
use crate::types::CreatePageRequest;

/// Actions exposed to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CreatePage,
    GetParentId,
    GetSpaceId,
    GetAllContent,
    GetSpaceDetails,
    GetAllSpaces,
    GetAvailableParents,
}

impl Action {
    /// Every action, in registration order.
    pub const ALL: [Self; 7] = [
        Self::CreatePage,
        Self::GetParentId,
        Self::GetSpaceId,
        Self::GetAllContent,
        Self::GetSpaceDetails,
        Self::GetAllSpaces,
        Self::GetAvailableParents,
    ];

    /// Action name as hosts refer to it.
    pub fn name(self) -> &'static str {
        match self {
            Self::CreatePage => "create_page",
            Self::GetParentId => "get_parent_id",
            Self::GetSpaceId => "get_space_id",
            Self::GetAllContent => "get_all_content",
            Self::GetSpaceDetails => "get_space_details",
            Self::GetAllSpaces => "get_all_spaces",
            Self::GetAvailableParents => "get_available_parents",
        }
    }

    /// One-line summary including the expected payload.
    pub fn description(self) -> &'static str {
        match self {
            Self::CreatePage => {
                "Create a page. Payload: {spaceId, title?, parentId?, body} (body in storage format)"
            }
            Self::GetParentId => "Fetch content with its ancestors. Payload: {content_id}",
            Self::GetSpaceId => "Look up a space id by key. Payload: {space_key}",
            Self::GetAllContent => "List content. No payload",
            Self::GetSpaceDetails => "Fetch the raw space record. Payload: {space_key}",
            Self::GetAllSpaces => "List spaces. No payload",
            Self::GetAvailableParents => {
                "List current pages of a space usable as parents. Payload: {space_id}"
            }
        }
    }

    /// Whether the action reads its payload.
    pub fn takes_payload(self) -> bool {
        !matches!(self, Self::GetAllContent | Self::GetAllSpaces)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ConfluenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| ConfluenceError::UnknownAction(s.to_owned()))
    }
}

/// Payload of `get_parent_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentIdParams {
    #[serde(deserialize_with = "crate::types::de::id")]
    pub content_id: String,
}

/// Payload of `get_space_id` and `get_space_details`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpaceParams {
    pub space_key: String,
}

/// Payload of `get_available_parents`.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailableParentsParams {
    #[serde(deserialize_with = "crate::types::de::id")]
    pub space_id: String,
}

/// Outcome of one action invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionResponse {
    Success { data: Value },
    Error { error: ActionError },
}

/// Error details carried by [`ActionResponse::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionError {
    /// Error category, see [`ConfluenceError::kind`].
    pub kind: &'static str,
    /// Human-readable message including causes.
    pub message: String,
    /// HTTP status when the server rejected the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
}

impl From<&ConfluenceError> for ActionError {
    fn from(err: &ConfluenceError) -> Self {
        Self {
            kind: err.kind(),
            message: err.detailed_message(),
            http_status: err.http_status(),
        }
    }
}

impl ActionResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Successful payload, if any.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success { data } => Some(data),
            Self::Error { .. } => None,
        }
    }

    /// Error details, if any.
    pub fn error(&self) -> Option<&ActionError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error } => Some(error),
        }
    }
}

impl From<Result<Value, ConfluenceError>> for ActionResponse {
    fn from(result: Result<Value, ConfluenceError>) -> Self {
        match result {
            Ok(data) => Self::Success { data },
            Err(err) => Self::Error {
                error: ActionError::from(&err),
            },
        }
    }
}

/// Run `action` with a JSON `payload`.
///
/// Payloads of actions without input are ignored.
pub fn dispatch<T: Transport>(
    client: &ConfluenceClient<T>,
    action: Action,
    payload: Value,
) -> ActionResponse {
    info!("Running action {}", action);
    let result = run(client, action, payload);
    if let Err(ref err) = result {
        warn!("Action {} failed: {}", action, err.detailed_message());
    }
    result.into()
}

/// Run the action named `name`; unknown names yield an error response.
pub fn dispatch_by_name<T: Transport>(
    client: &ConfluenceClient<T>,
    name: &str,
    payload: Value,
) -> ActionResponse {
    match name.parse::<Action>() {
        Ok(action) => dispatch(client, action, payload),
        Err(err) => ActionResponse::Error {
            error: ActionError::from(&err),
        },
    }
}

fn run<T: Transport>(
    client: &ConfluenceClient<T>,
    action: Action,
    payload: Value,
) -> Result<Value, ConfluenceError> {
    let data = match action {
        Action::CreatePage => {
            let request: CreatePageRequest = decode(action, payload)?;
            serde_json::to_value(client.create_page(&request)?)?
        }
        Action::GetParentId => {
            let params: ContentIdParams = decode(action, payload)?;
            serde_json::to_value(client.get_parent_id(&params.content_id)?)?
        }
        Action::GetSpaceId => {
            let params: SpaceParams = decode(action, payload)?;
            serde_json::to_value(client.get_space_id(&params.space_key)?)?
        }
        Action::GetAllContent => serde_json::to_value(client.get_all_content()?)?,
        Action::GetSpaceDetails => {
            let params: SpaceParams = decode(action, payload)?;
            client.get_space_details(&params.space_key)?
        }
        Action::GetAllSpaces => serde_json::to_value(client.get_all_spaces()?)?,
        Action::GetAvailableParents => {
            let params: AvailableParentsParams = decode(action, payload)?;
            serde_json::to_value(client.get_available_parents(&params.space_id)?)?
        }
    };
    Ok(data)
}

fn decode<P: DeserializeOwned>(action: Action, payload: Value) -> Result<P, ConfluenceError> {
    serde_json::from_value(payload)
        .map_err(|e| ConfluenceError::Validation(format!("invalid payload for {action}: {e}")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::client::mock::MockTransport;

    #[test]
    fn test_names_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn test_unknown_action_name() {
        let err = "delete_page".parse::<Action>().unwrap_err();
        assert!(matches!(err, ConfluenceError::UnknownAction(ref name) if name == "delete_page"));
    }

    #[test]
    fn test_dispatch_get_all_spaces_success() {
        let client = ConfluenceClient::new(MockTransport::default().ok(json!({
            "results": [{"id": "1", "key": "S1", "name": "Space One", "type": "global", "status": "current"}]
        })));

        let response = dispatch(&client, Action::GetAllSpaces, Value::Null);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "success",
                "data": {"results": [{"id": "1", "key": "S1", "name": "Space One", "type": "global", "status": "current"}]}
            })
        );
    }

    #[test]
    fn test_dispatch_get_all_spaces_error() {
        let client = ConfluenceClient::new(MockTransport::default().status(503, "unavailable"));

        let response = dispatch(&client, Action::GetAllSpaces, Value::Null);

        assert!(!response.is_success());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "error",
                "error": {
                    "kind": "http_response",
                    "message": "HTTP error: 503 - unavailable",
                    "http_status": 503
                }
            })
        );
    }

    #[test]
    fn test_dispatch_get_parent_id_error_not_defaulted() {
        let client = ConfluenceClient::new(MockTransport::default().status(404, "missing"));

        let response = dispatch(&client, Action::GetParentId, json!({"content_id": "9"}));

        assert_eq!(response.data(), None);
        assert_eq!(response.error().unwrap().http_status, Some(404));
    }

    #[test]
    fn test_dispatch_missing_payload_field() {
        let client = ConfluenceClient::new(MockTransport::default());

        let response = dispatch(&client, Action::GetSpaceId, json!({}));

        let error = response.error().unwrap();
        assert_eq!(error.kind, "validation");
        assert!(error.message.contains("get_space_id"), "{}", error.message);
        assert!(client.transport().calls().is_empty());
    }

    #[test]
    fn test_dispatch_create_page() {
        let client = ConfluenceClient::new(MockTransport::default().ok(json!({
            "id": "123",
            "status": "current",
            "title": "Runbook",
            "spaceId": "65537",
            "authorId": "abc",
            "createdAt": "2024-01-15T10:00:00.000Z",
            "version": {"number": 1}
        })));

        let response = dispatch(
            &client,
            Action::CreatePage,
            json!({"spaceId": "65537", "title": "Runbook", "body": "<p>x</p>"}),
        );

        assert_eq!(response.data().unwrap()["id"], "123");
        let calls = client.transport().calls();
        assert_eq!(calls[0].body.as_ref().unwrap()["body"]["value"], "<p>x</p>");
    }

    #[test]
    fn test_dispatch_available_parents_numeric_space_id() {
        let client = ConfluenceClient::new(MockTransport::default().ok(json!({"results": []})));

        let response = dispatch(&client, Action::GetAvailableParents, json!({"space_id": 65537}));

        assert_eq!(response.data(), Some(&json!({"results": []})));
        assert_eq!(
            client.transport().calls()[0].endpoint,
            "/wiki/api/v2/spaces/65537/pages"
        );
    }

    #[test]
    fn test_dispatch_available_parents_passes_response_through() {
        let client = ConfluenceClient::new(MockTransport::default().ok(json!({
            "results": [
                {
                    "id": "1",
                    "status": "current",
                    "title": "Home",
                    "spaceId": "65537",
                    "parentId": null,
                    "authorId": "5b10ac8d82e05b22cc7d4ef5",
                    "createdAt": "2024-01-15T10:00:00.000Z",
                    "position": 4,
                    "version": {"number": 7, "authorId": "5b10ac8d82e05b22cc7d4ef5"}
                },
                {"id": "2", "status": "trashed", "title": "Gone", "spaceId": "65537"}
            ],
            "_links": {
                "next": "/wiki/api/v2/spaces/65537/pages?cursor=abc",
                "base": "https://example.atlassian.net/wiki"
            }
        })));

        let response = dispatch(&client, Action::GetAvailableParents, json!({"space_id": "65537"}));

        assert_eq!(
            response.data(),
            Some(&json!({
                "results": [{
                    "id": "1",
                    "status": "current",
                    "title": "Home",
                    "spaceId": "65537",
                    "parentId": null,
                    "authorId": "5b10ac8d82e05b22cc7d4ef5",
                    "createdAt": "2024-01-15T10:00:00.000Z",
                    "position": 4,
                    "version": {"number": 7, "authorId": "5b10ac8d82e05b22cc7d4ef5"}
                }],
                "_links": {
                    "next": "/wiki/api/v2/spaces/65537/pages?cursor=abc",
                    "base": "https://example.atlassian.net/wiki"
                }
            }))
        );
    }

    #[test]
    fn test_dispatch_ignores_payload_for_listing() {
        let client = ConfluenceClient::new(MockTransport::default().ok(json!({"results": []})));
        assert!(!Action::GetAllContent.takes_payload());

        let response = dispatch(&client, Action::GetAllContent, json!({"anything": true}));

        assert!(response.is_success());
    }

    #[test]
    fn test_dispatch_by_name_unknown() {
        let client = ConfluenceClient::new(MockTransport::default());

        let response = dispatch_by_name(&client, "nope", Value::Null);

        assert_eq!(response.error().unwrap().kind, "unknown_action");
    }
}
