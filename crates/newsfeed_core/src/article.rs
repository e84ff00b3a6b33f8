use serde::{Deserialize, Deserializer, Serialize};

/// One article as returned by the news API.
///
/// Field names follow the API's camelCase JSON. Missing or `null` fields
/// deserialize to empty values; the renderer decides how to present them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(deserialize_with = "nullable_string")]
    pub image_url: String,
    #[serde(deserialize_with = "nullable_string")]
    pub category: String,
    #[serde(deserialize_with = "nullable_string")]
    pub source: String,
    /// Publish timestamp exactly as sent (ISO 8601).
    #[serde(deserialize_with = "nullable_string")]
    pub published_at: String,
    #[serde(deserialize_with = "nullable_string")]
    pub read_more_url: String,
    pub country: Option<String>,
    pub language: Option<String>,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
