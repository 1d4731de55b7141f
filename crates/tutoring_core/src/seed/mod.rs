//! Statically seeded meeting dataset.
//!
//! # Responsibility
//! - Embed the initial meeting document into the binary.
//! - Decode meeting documents into validated domain values.
//!
//! # Invariants
//! - Decoding never panics; malformed documents surface as `SeedError`.
//! - Seeded order is the document order.

use crate::model::meeting::Meeting;
use crate::repo::meeting_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SEED_MEETINGS_JSON: &str = include_str!("meetings.json");

/// Failure while loading a meeting document.
#[derive(Debug)]
pub enum SeedError {
    /// JSON syntax or shape error, including meeting invariant violations.
    Decode(serde_json::Error),
    /// Decoded meetings cannot form a store (e.g. duplicate ids).
    Store(RepoError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "invalid meeting document: {err}"),
            Self::Store(err) => write!(f, "invalid meeting set: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<RepoError> for SeedError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

/// Decodes a JSON array of meetings.
pub fn parse_meetings(json: &str) -> Result<Vec<Meeting>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Returns the meetings every process starts with.
pub fn seeded_meetings() -> Result<Vec<Meeting>, SeedError> {
    parse_meetings(SEED_MEETINGS_JSON)
}

#[cfg(test)]
mod tests {
    use super::{parse_meetings, seeded_meetings, SeedError};

    #[test]
    fn embedded_seed_decodes() {
        let meetings = seeded_meetings().unwrap();
        let ids: Vec<&str> = meetings.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["meeting-1", "meeting-2", "meeting-3", "meeting-4"]);
    }

    #[test]
    fn malformed_document_is_a_decode_error() {
        let err = parse_meetings("{ not json").unwrap_err();
        assert!(matches!(err, SeedError::Decode(_)));
    }
}
