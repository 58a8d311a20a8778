use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A named category shared by content and user profiles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Interest {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
}

/// Article as returned by the content API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub introduction: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "reference")]
    pub category: Option<Interest>,
    #[serde(default, deserialize_with = "reference")]
    pub author: Option<Author>,
    #[serde(default = "unknown_timestamp", deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, alias = "thumbnailUrl")]
    pub thumbnail: Option<String>,
}

/// Blog as returned by the content API. `content` is rich-text HTML.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "reference")]
    pub category: Option<Interest>,
    #[serde(default, deserialize_with = "reference")]
    pub author: Option<Author>,
    #[serde(default = "unknown_timestamp", deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, alias = "thumbnailUrl")]
    pub thumbnail: Option<String>,
}

/// Records the content API may send unpopulated, as a bare id string
trait FromBareId {
    fn from_bare_id(id: String) -> Self;
}

impl FromBareId for Interest {
    fn from_bare_id(id: String) -> Self {
        Self {
            id,
            name: String::new(),
        }
    }
}

impl FromBareId for Author {
    fn from_bare_id(id: String) -> Self {
        Self {
            id,
            username: String::new(),
        }
    }
}

/// A populated object, a bare id, or nothing. Anything unreadable
/// becomes `None` instead of failing the whole listing.
fn reference<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromBareId + serde::de::DeserializeOwned,
{
    let reference = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(T::from_bare_id(id)),
        Some(value) => match serde_json::from_value(value) {
            Ok(reference) => Some(reference),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable content reference");
                None
            }
        },
    };
    Ok(reference)
}

/// Missing or unreadable timestamps sort as the oldest content
fn unknown_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok(),
        Some(Value::Number(millis)) => millis
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    };

    Ok(parsed.unwrap_or_else(|| {
        tracing::warn!("Content record has no readable createdAt");
        unknown_timestamp()
    }))
}
