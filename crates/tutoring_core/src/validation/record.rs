//! Record validator.
//!
//! # Responsibility
//! - Evaluate the three independent record rules (summary, topics, progress).
//! - Return a validity flag with a field-to-message mapping.
//!
//! # Invariants
//! - `is_valid` is true iff `errors` is empty.
//! - `nextSteps` and `attendance` are never validated.
//! - Lengths are measured in characters after trimming.

use crate::model::record::RecordField;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum trimmed length of `summary`.
pub const SUMMARY_MIN_CHARS: usize = 10;
/// Minimum trimmed length of `studentProgress`.
pub const STUDENT_PROGRESS_MIN_CHARS: usize = 10;

pub const SUMMARY_TOO_SHORT: &str = "Summary must be at least 10 characters";
pub const TOPICS_MISSING: &str = "Please list at least one topic covered";
pub const STUDENT_PROGRESS_TOO_SHORT: &str =
    "Student progress notes must be at least 10 characters";

/// Validator input. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCandidate {
    pub summary: Option<String>,
    /// Topics after comma-splitting.
    pub topics_covered: Option<Vec<String>>,
    pub student_progress: Option<String>,
    pub next_steps: Option<String>,
    pub attendance: Option<String>,
}

/// Validation outcome for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordValidation {
    pub is_valid: bool,
    pub errors: BTreeMap<RecordField, String>,
}

impl Default for RecordValidation {
    fn default() -> Self {
        Self::from_errors(BTreeMap::new())
    }
}

impl RecordValidation {
    fn from_errors(errors: BTreeMap<RecordField, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Error message reported for `field`, if any.
    pub fn error(&self, field: RecordField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Removes the error for `field`, keeping `is_valid` in sync.
    pub fn clear_field(&mut self, field: RecordField) {
        self.errors.remove(&field);
        self.is_valid = self.errors.is_empty();
    }
}

impl Display for RecordValidation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_valid {
            return write!(f, "record is valid");
        }
        let fields = self
            .errors
            .keys()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "record validation failed: {fields}")
    }
}

impl Error for RecordValidation {}

/// Validates a candidate record.
///
/// Each rule runs independently so all failures are reported together.
pub fn validate_record(candidate: &RecordCandidate) -> RecordValidation {
    let mut errors = BTreeMap::new();

    if !meets_min_chars(candidate.summary.as_deref(), SUMMARY_MIN_CHARS) {
        errors.insert(RecordField::Summary, SUMMARY_TOO_SHORT.to_string());
    }

    let has_topic = candidate
        .topics_covered
        .as_ref()
        .is_some_and(|topics| topics.iter().any(|topic| !topic.trim().is_empty()));
    if !has_topic {
        errors.insert(RecordField::TopicsCovered, TOPICS_MISSING.to_string());
    }

    if !meets_min_chars(
        candidate.student_progress.as_deref(),
        STUDENT_PROGRESS_MIN_CHARS,
    ) {
        errors.insert(
            RecordField::StudentProgress,
            STUDENT_PROGRESS_TOO_SHORT.to_string(),
        );
    }

    RecordValidation::from_errors(errors)
}

fn meets_min_chars(value: Option<&str>, min_chars: usize) -> bool {
    value.is_some_and(|text| text.trim().chars().count() >= min_chars)
}

#[cfg(test)]
mod tests {
    use super::meets_min_chars;

    #[test]
    fn min_chars_counts_characters_not_bytes() {
        // 8 characters, 12 bytes.
        let name = "ng\u{1ECD}c b\u{1EA3}o";
        assert_eq!(name.len(), 12);
        assert!(!meets_min_chars(Some(name), 10));
        assert!(meets_min_chars(Some(name), 8));
    }

    #[test]
    fn min_chars_boundary() {
        assert!(meets_min_chars(Some("0123456789"), 10));
        assert!(!meets_min_chars(Some(" 012345678 "), 10));
        assert!(!meets_min_chars(None, 10));
    }
}
