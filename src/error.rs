use crate::document::identifier::IdentifierError;
use serde_json;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum FixtureError {
    MalformedIdentifier(IdentifierError),
    InvalidPosition(u32),
    Config(String),
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::MalformedIdentifier(err) => write!(f, "Malformed identifier: {}", err),
            FixtureError::InvalidPosition(pos) => {
                write!(f, "Invalid page position: {} (positions start at 1)", pos)
            }
            FixtureError::Config(msg) => write!(f, "Config error: {}", msg),
            FixtureError::Io(err) => write!(f, "IO error: {}", err),
            FixtureError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::MalformedIdentifier(err) => Some(err),
            FixtureError::Io(err) => Some(err),
            FixtureError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for FixtureError {
    fn from(err: io::Error) -> FixtureError {
        FixtureError::Io(err)
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> FixtureError {
        FixtureError::Json(err)
    }
}

impl From<IdentifierError> for FixtureError {
    fn from(err: IdentifierError) -> FixtureError {
        FixtureError::MalformedIdentifier(err)
    }
}
