//! Confluence space types.

use serde::{Deserialize, Serialize};

use super::de;

/// A single space, as returned by `GET /space/{key}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpaceDetails {
    /// Numeric space ID.
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    /// Space key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Plain-text description.
    #[serde(
        default,
        deserialize_with = "de::opt_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

/// Entry of the space listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpaceSummary {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub key: String,
    pub name: String,
    /// `global` or `personal`.
    #[serde(rename = "type")]
    pub space_type: String,
    pub status: String,
    #[serde(
        default,
        deserialize_with = "de::opt_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

/// Space listing response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GetAllSpacesResponse {
    /// Spaces in API response order.
    pub results: Vec<SpaceSummary>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_space_details_from_v1() {
        let space: SpaceDetails = serde_json::from_value(json!({
            "id": 65537,
            "key": "ENG",
            "name": "Engineering",
            "type": "global",
            "_links": {"webui": "/spaces/ENG"}
        }))
        .unwrap();
        assert_eq!(
            space,
            SpaceDetails {
                id: "65537".to_owned(),
                key: "ENG".to_owned(),
                name: "Engineering".to_owned(),
                description: None,
            }
        );
    }

    #[test]
    fn test_space_summary_serializes_type() {
        let space = SpaceSummary {
            id: "1".to_owned(),
            key: "S1".to_owned(),
            name: "Space One".to_owned(),
            space_type: "global".to_owned(),
            status: "current".to_owned(),
            description: None,
        };
        assert_eq!(
            serde_json::to_value(&space).unwrap(),
            json!({"id": "1", "key": "S1", "name": "Space One", "type": "global", "status": "current"})
        );
    }

    #[test]
    fn test_space_summary_requires_status() {
        let result: Result<SpaceSummary, _> = serde_json::from_value(
            json!({"id": "1", "key": "S1", "name": "Space One", "type": "global"}),
        );
        assert!(result.is_err());
    }
}
