//! Lenient deserializers for fields whose wire shape differs between API versions.

use serde::{Deserialize, Deserializer};

/// Ids are numbers in REST v1 and strings in v2.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Str(String),
    Num(u64),
}

impl From<IdRepr> for String {
    fn from(id: IdRepr) -> Self {
        match id {
            IdRepr::Str(s) => s,
            IdRepr::Num(n) => n.to_string(),
        }
    }
}

pub(crate) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    IdRepr::deserialize(deserializer).map(Into::into)
}

pub(crate) fn opt_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<IdRepr>::deserialize(deserializer).map(|id| id.map(Into::into))
}

#[derive(Deserialize)]
struct PlainValue {
    value: String,
}

/// Space descriptions are plain strings, or `{"plain": {"value": ...}}` when
/// expanded through REST v1. Other representations carry no plain text.
#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptionRepr {
    Text(String),
    Expanded { plain: PlainValue },
    Other(serde::de::IgnoredAny),
}

pub(crate) fn opt_description<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let description = Option::<DescriptionRepr>::deserialize(deserializer)?;
    Ok(description.and_then(|d| match d {
        DescriptionRepr::Text(text) => Some(text),
        DescriptionRepr::Expanded { plain } => Some(plain.value),
        DescriptionRepr::Other(_) => None,
    }))
}
