//! Meeting record model.
//!
//! # Responsibility
//! - Define the session record written by a tutor after a meeting.
//! - Own the text representation of the topics list used by record forms.
//!
//! # Invariants
//! - `topics_covered` entries are trimmed and never empty when produced by
//!   `split_topics`.
//! - `next_steps` is `None` rather than an empty string.
//! - `topics_covered` holds at least one non-blank topic.
//! - `last_updated` is UTC with whole-second precision when stamped by core.

use crate::model::meeting::MeetingValidationError;
use chrono::{NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Separator used when rendering topics back into a single form field.
const TOPIC_JOIN_SEPARATOR: &str = ", ";

/// Session record attached 1:1 to a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    /// Free-text summary of the session.
    pub summary: String,
    /// Ordered list of topics covered during the session.
    pub topics_covered: Vec<String>,
    /// Notes about how students progressed.
    pub student_progress: String,
    /// Optional follow-up plan for the next session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
    /// Attendance summary text, e.g. `2/3 students attended`.
    pub attendance: String,
    /// UTC timestamp of the last save.
    pub last_updated: NaiveDateTime,
}

impl MeetingRecord {
    /// Checks that at least one non-blank topic is listed.
    pub fn validate(&self) -> Result<(), MeetingValidationError> {
        if self.topics_covered.iter().all(|topic| topic.trim().is_empty()) {
            return Err(MeetingValidationError::EmptyTopics);
        }
        Ok(())
    }

    /// Renders `topics_covered` as one comma-separated form value.
    pub fn topics_text(&self) -> String {
        join_topics(&self.topics_covered)
    }
}

/// Field names of a record form.
///
/// Serialized with the camelCase names the record form uses as input keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    Summary,
    TopicsCovered,
    StudentProgress,
    NextSteps,
    Attendance,
}

impl RecordField {
    /// All form fields in display order.
    pub const ALL: [RecordField; 5] = [
        Self::Summary,
        Self::TopicsCovered,
        Self::StudentProgress,
        Self::NextSteps,
        Self::Attendance,
    ];

    /// Stable field key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::TopicsCovered => "topicsCovered",
            Self::StudentProgress => "studentProgress",
            Self::NextSteps => "nextSteps",
            Self::Attendance => "attendance",
        }
    }

    /// Parses a field key. Matching is exact.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }
}

impl Display for RecordField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits comma-separated topic input into trimmed, non-empty topics.
///
/// Order is preserved and duplicates are kept.
pub fn split_topics(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins topics into the single-line form representation (`a, b, c`).
pub fn join_topics(topics: &[String]) -> String {
    topics.join(TOPIC_JOIN_SEPARATOR)
}

/// Returns the current UTC time truncated to whole seconds.
pub fn current_timestamp() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}

#[cfg(test)]
mod tests {
    use super::{current_timestamp, join_topics, split_topics, RecordField};
    use chrono::{Duration, Utc};

    #[test]
    fn split_topics_trims_and_drops_blank_pieces() {
        assert_eq!(
            split_topics(" loops, ,conditionals ,, "),
            vec!["loops".to_string(), "conditionals".to_string()]
        );
        assert!(split_topics(" , ,").is_empty());
        assert!(split_topics("").is_empty());
    }

    #[test]
    fn join_topics_uses_comma_space() {
        let topics = vec!["Stack layout".to_string(), "Payloads".to_string()];
        assert_eq!(join_topics(&topics), "Stack layout, Payloads");
        assert_eq!(split_topics(&join_topics(&topics)), topics);
    }

    #[test]
    fn current_timestamp_is_utc_whole_seconds() {
        let before = Utc::now().naive_utc() - Duration::seconds(1);
        let stamped = current_timestamp();
        let after = Utc::now().naive_utc();
        assert!(before <= stamped && stamped <= after);
        assert_eq!(stamped.and_utc().timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn record_field_keys_parse_back() {
        for field in RecordField::ALL {
            assert_eq!(RecordField::parse(field.as_str()), Some(field));
        }
        assert_eq!(RecordField::parse("Summary"), None);
    }
}
