// Document identifiers follow the external paging scheme `A-B-C-D`:
//   A = numeric prefix, also the base of the page index
//   A-B-C = image folder, D = image name
// e.g. `7-K16813-1026-X` -> https://<host>/7-K16813-1026/X.png

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const SEGMENT_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("expected 4 dash-separated segments in {input:?}, found {found}")]
    SegmentCount { input: String, found: usize },
    #[error("segment {position} of {input:?} is empty")]
    EmptySegment { input: String, position: usize },
    #[error("segment {position} of {input:?} contains {found:?}; only ASCII letters, digits and '_' are allowed")]
    InvalidSegmentChar {
        input: String,
        position: usize,
        found: char,
    },
    #[error("first segment of {input:?} is not an unsigned integer")]
    NonNumericPrefix { input: String },
    #[error("page index overflows for prefix {prefix} at position {position}")]
    IndexOverflow { prefix: u64, position: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId {
    raw: String,
    prefix: u64,
}

impl DocumentId {
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let segments: Vec<&str> = input.split('-').collect();
        if segments.len() != SEGMENT_COUNT {
            return Err(IdentifierError::SegmentCount {
                input: input.to_string(),
                found: segments.len(),
            });
        }
        if let Some(position) = segments.iter().position(|s| s.is_empty()) {
            return Err(IdentifierError::EmptySegment {
                input: input.to_string(),
                position,
            });
        }

        // Segments end up in file names and URL paths.
        for (position, segment) in segments.iter().enumerate() {
            if let Some(found) = segment
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
            {
                return Err(IdentifierError::InvalidSegmentChar {
                    input: input.to_string(),
                    position,
                    found,
                });
            }
        }

        let prefix = segments[0]
            .parse::<u64>()
            .map_err(|_| IdentifierError::NonNumericPrefix {
                input: input.to_string(),
            })?;

        Ok(Self {
            raw: input.to_string(),
            prefix,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The numeric first segment.
    pub fn prefix(&self) -> u64 {
        self.prefix
    }

    /// All four segments in order. Parsing guarantees the count.
    pub fn segments(&self) -> [&str; SEGMENT_COUNT] {
        let mut out = [""; SEGMENT_COUNT];
        for (slot, segment) in out.iter_mut().zip(self.raw.split('-')) {
            *slot = segment;
        }
        out
    }

    pub fn page_id(&self, position: u32) -> String {
        format!("{}-{}", self.raw, position)
    }

    /// `<prefix>-<position>-<prefix + position - 1>`, kept as an opaque string.
    pub fn page_index(&self, position: u32) -> Result<String, IdentifierError> {
        let offset = u64::from(position.saturating_sub(1));
        let global = self
            .prefix
            .checked_add(offset)
            .ok_or(IdentifierError::IndexOverflow {
                prefix: self.prefix,
                position,
            })?;
        Ok(format!("{}-{}-{}", self.segments()[0], position, global))
    }

    pub fn image_src(&self, base_url: &str) -> String {
        let [a, b, c, d] = self.segments();
        format!("{}/{}-{}-{}/{}.png", base_url, a, b, c, d)
    }
}

impl FromStr for DocumentId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for DocumentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DocumentId::parse(&raw).map_err(serde::de::Error::custom)
    }
}
