pub mod identifier;
pub mod status;

use crate::document::status::PageStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// This file defines the fixture records written to disk: a Document and its ordered Pages.
// Field order below is the key order in the emitted JSON.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub index: String,
    pub src: String,
    pub status: PageStatus,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Pretty-printed with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Look up a page by its 1-based position.
    pub fn page(&self, position: usize) -> Option<&Page> {
        position.checked_sub(1).and_then(|i| self.pages.get(i))
    }
}

/// ISO-8601 UTC with millisecond precision and a `Z` suffix, e.g. `2026-03-04T05:06:07.089Z`.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
    }
}
