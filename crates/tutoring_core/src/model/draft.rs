//! Editable record form state.
//!
//! # Responsibility
//! - Hold the raw text a tutor types into the write/edit record form.
//! - Prefill the form from a meeting and convert it into a candidate/record.
//!
//! # Invariants
//! - Every field is plain text; topics stay comma-separated until saved.
//! - Editing a field clears only that field's previous validation error.

use crate::model::meeting::Meeting;
use crate::model::record::{split_topics, MeetingRecord, RecordField};
use crate::validation::record::{RecordCandidate, RecordValidation};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Raw text of the record form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub summary: String,
    /// Comma-separated topics, e.g. `loops, conditionals`.
    pub topics_covered: String,
    pub student_progress: String,
    pub next_steps: String,
    pub attendance: String,
}

impl RecordDraft {
    /// Prefills form state for `meeting`.
    ///
    /// With a record, fields are copied and topics joined with `, `.
    /// Without one, text fields are empty and attendance defaults to the
    /// roster summary.
    pub fn for_meeting(meeting: &Meeting) -> Self {
        match meeting.record() {
            Some(record) => Self {
                summary: record.summary.clone(),
                topics_covered: record.topics_text(),
                student_progress: record.student_progress.clone(),
                next_steps: record.next_steps.clone().unwrap_or_default(),
                attendance: record.attendance.clone(),
            },
            None => Self {
                attendance: meeting.attendance_summary(),
                ..Self::default()
            },
        }
    }

    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Summary => &self.summary,
            RecordField::TopicsCovered => &self.topics_covered,
            RecordField::StudentProgress => &self.student_progress,
            RecordField::NextSteps => &self.next_steps,
            RecordField::Attendance => &self.attendance,
        }
    }

    /// Replaces one field and drops its stale error from `errors`.
    pub fn set_field(
        &mut self,
        field: RecordField,
        value: impl Into<String>,
        errors: &mut RecordValidation,
    ) {
        let slot = match field {
            RecordField::Summary => &mut self.summary,
            RecordField::TopicsCovered => &mut self.topics_covered,
            RecordField::StudentProgress => &mut self.student_progress,
            RecordField::NextSteps => &mut self.next_steps,
            RecordField::Attendance => &mut self.attendance,
        };
        *slot = value.into();
        errors.clear_field(field);
    }

    /// Topics parsed from the comma-separated input.
    pub fn topics(&self) -> Vec<String> {
        split_topics(&self.topics_covered)
    }

    /// Builds the validator input with topics already split.
    pub fn to_candidate(&self) -> RecordCandidate {
        RecordCandidate {
            summary: Some(self.summary.clone()),
            topics_covered: Some(self.topics()),
            student_progress: Some(self.student_progress.clone()),
            next_steps: Some(self.next_steps.clone()),
            attendance: Some(self.attendance.clone()),
        }
    }

    /// Converts the form into a record stamped with `last_updated`.
    ///
    /// Text is stored as typed; blank next steps become `None`. Callers are
    /// expected to validate first.
    pub fn to_record(&self, last_updated: NaiveDateTime) -> MeetingRecord {
        let next_steps = if self.next_steps.trim().is_empty() {
            None
        } else {
            Some(self.next_steps.clone())
        };
        MeetingRecord {
            summary: self.summary.clone(),
            topics_covered: self.topics(),
            student_progress: self.student_progress.clone(),
            next_steps,
            attendance: self.attendance.clone(),
            last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RecordDraft;
    use crate::model::record::RecordField;
    use crate::validation::record::{validate_record, RecordCandidate};
    use chrono::NaiveDate;

    #[test]
    fn set_field_clears_only_that_error() {
        let mut draft = RecordDraft::default();
        let mut errors = validate_record(&RecordCandidate::default());
        assert_eq!(errors.errors.len(), 3);

        draft.set_field(RecordField::Summary, "A long enough summary", &mut errors);
        assert_eq!(draft.field(RecordField::Summary), "A long enough summary");
        assert!(errors.error(RecordField::Summary).is_none());
        assert!(errors.error(RecordField::TopicsCovered).is_some());
        assert!(!errors.is_valid);
    }

    #[test]
    fn to_record_drops_blank_next_steps() {
        let draft = RecordDraft {
            summary: "Covered loops in depth".to_string(),
            topics_covered: "loops".to_string(),
            student_progress: "Everyone kept up".to_string(),
            next_steps: "   ".to_string(),
            attendance: "1/1 students attended".to_string(),
        };
        let stamp = NaiveDate::from_ymd_opt(2025, 5, 16)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let record = draft.to_record(stamp);
        assert_eq!(record.next_steps, None);
        assert_eq!(record.topics_covered, vec!["loops".to_string()]);
        assert_eq!(record.last_updated, stamp);
    }
}
