//! Meeting domain model.
//!
//! # Responsibility
//! - Define the tutoring meeting, its roster and its optional record.
//! - Validate wire documents before they become in-memory meetings.
//!
//! # Invariants
//! - `has_record()` is derived from `record()`; the two cannot disagree.
//! - `end_time` is not earlier than `start_time`.
//! - Student ids are unique within one roster.
//! - An attached record lists at least one topic.
//! - The roster cannot be changed after construction.

use crate::model::record::MeetingRecord;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable meeting identifier, e.g. `meeting-1`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingId(String);

impl MeetingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for MeetingId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MeetingId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Student identifier, unique within one meeting roster.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One roster entry of a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    /// Display name.
    pub name: String,
    pub attended: bool,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, attended: bool) -> Self {
        Self {
            id: StudentId::new(id),
            name: name.into(),
            attended,
        }
    }
}

/// Structural violations found while constructing or decoding a meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingValidationError {
    EmptyId,
    InvalidTimeWindow { start: NaiveTime, end: NaiveTime },
    DuplicateStudent(StudentId),
    HasRecordMismatch { has_record: bool },
    /// Attached record lists no non-blank topic.
    EmptyTopics,
}

impl Display for MeetingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "meeting id cannot be empty"),
            Self::InvalidTimeWindow { start, end } => write!(
                f,
                "endTime ({}) must be >= startTime ({})",
                end.format(TIME_FORMAT),
                start.format(TIME_FORMAT)
            ),
            Self::DuplicateStudent(id) => write!(f, "duplicate student id in roster: {id}"),
            Self::HasRecordMismatch { has_record } => write!(
                f,
                "hasRecord is {has_record} but record is {}",
                if *has_record { "missing" } else { "present" }
            ),
            Self::EmptyTopics => write!(f, "record must list at least one topic covered"),
        }
    }
}

impl Error for MeetingValidationError {}

/// Scheduled tutoring meeting.
///
/// Roster and record are private so that the roster stays fixed and the
/// record can only change through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MeetingWire", into = "MeetingWire")]
pub struct Meeting {
    pub id: MeetingId,
    pub course_code: String,
    pub course_name: String,
    /// Calendar date; range filters compare this value only.
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
    pub topic: String,
    /// Chapter label, e.g. `Chapter 4`.
    pub chapter: String,
    students: Vec<Student>,
    record: Option<MeetingRecord>,
}

impl Meeting {
    /// Creates a meeting with an empty roster, no record and blank
    /// room/topic/chapter.
    ///
    /// Start and end are times of day on `date`, so a session crossing
    /// midnight cannot be represented and is rejected.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is blank.
    /// - `InvalidTimeWindow` when `end_time < start_time`.
    pub fn new(
        id: impl Into<String>,
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, MeetingValidationError> {
        let meeting = Self {
            id: MeetingId::new(id),
            course_code: course_code.into(),
            course_name: course_name.into(),
            date,
            start_time,
            end_time,
            room: String::new(),
            topic: String::new(),
            chapter: String::new(),
            students: Vec::new(),
            record: None,
        };
        meeting.validate()?;
        Ok(meeting)
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>, chapter: impl Into<String>) -> Self {
        self.topic = topic.into();
        self.chapter = chapter.into();
        self
    }

    /// Sets the roster. Only available while building a meeting.
    ///
    /// # Errors
    /// - `DuplicateStudent` when two entries share an id.
    pub fn with_students(mut self, students: Vec<Student>) -> Result<Self, MeetingValidationError> {
        self.students = students;
        self.validate()?;
        Ok(self)
    }

    /// Attaches an initial record while building a meeting.
    ///
    /// # Errors
    /// - `EmptyTopics` when the record lists no topic.
    pub fn with_record(mut self, record: MeetingRecord) -> Result<Self, MeetingValidationError> {
        self.record = Some(record);
        self.validate()?;
        Ok(self)
    }

    /// Checks all structural invariants.
    pub fn validate(&self) -> Result<(), MeetingValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(MeetingValidationError::EmptyId);
        }
        if self.end_time < self.start_time {
            return Err(MeetingValidationError::InvalidTimeWindow {
                start: self.start_time,
                end: self.end_time,
            });
        }
        let mut seen = HashSet::with_capacity(self.students.len());
        for student in &self.students {
            if !seen.insert(&student.id) {
                return Err(MeetingValidationError::DuplicateStudent(student.id.clone()));
            }
        }
        if let Some(record) = &self.record {
            record.validate()?;
        }
        Ok(())
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn record(&self) -> Option<&MeetingRecord> {
        self.record.as_ref()
    }

    pub fn has_record(&self) -> bool {
        self.record.is_some()
    }

    /// Number of roster entries marked as attended.
    pub fn attended_count(&self) -> usize {
        self.students.iter().filter(|student| student.attended).count()
    }

    /// Default attendance text for a new record, e.g. `2/3 students attended`.
    pub fn attendance_summary(&self) -> String {
        format!(
            "{}/{} students attended",
            self.attended_count(),
            self.students.len()
        )
    }

    /// Returns whether the meeting date lies in `[start, end]`.
    pub fn falls_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }

    /// Replaces the whole record. Store-only mutation path.
    ///
    /// A rejected record leaves the previous one in place.
    pub(crate) fn replace_record(
        &mut self,
        record: MeetingRecord,
    ) -> Result<(), MeetingValidationError> {
        record.validate()?;
        self.record = Some(record);
        Ok(())
    }
}

const TIME_FORMAT: &str = "%H:%M";

/// External document shape, matching the seed JSON field names.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeetingWire {
    id: MeetingId,
    course_code: String,
    course_name: String,
    date: NaiveDate,
    #[serde(with = "hh_mm")]
    start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    end_time: NaiveTime,
    #[serde(default)]
    room: String,
    #[serde(default)]
    topic: String,
    #[serde(default)]
    chapter: String,
    #[serde(default)]
    students: Vec<Student>,
    has_record: bool,
    #[serde(default)]
    record: Option<MeetingRecord>,
}

impl TryFrom<MeetingWire> for Meeting {
    type Error = MeetingValidationError;

    fn try_from(wire: MeetingWire) -> Result<Self, Self::Error> {
        if wire.has_record != wire.record.is_some() {
            return Err(MeetingValidationError::HasRecordMismatch {
                has_record: wire.has_record,
            });
        }

        let meeting = Self {
            id: wire.id,
            course_code: wire.course_code,
            course_name: wire.course_name,
            date: wire.date,
            start_time: wire.start_time,
            end_time: wire.end_time,
            room: wire.room,
            topic: wire.topic,
            chapter: wire.chapter,
            students: wire.students,
            record: wire.record,
        };
        meeting.validate()?;
        Ok(meeting)
    }
}

impl From<Meeting> for MeetingWire {
    fn from(meeting: Meeting) -> Self {
        Self {
            has_record: meeting.has_record(),
            id: meeting.id,
            course_code: meeting.course_code,
            course_name: meeting.course_name,
            date: meeting.date,
            start_time: meeting.start_time,
            end_time: meeting.end_time,
            room: meeting.room,
            topic: meeting.topic,
            chapter: meeting.chapter,
            students: meeting.students,
            record: meeting.record,
        }
    }
}

/// `HH:MM` time-of-day codec. Seconds are accepted on input.
mod hh_mm {
    use super::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&text, TIME_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&text, "%H:%M:%S"))
            .map_err(|err| serde::de::Error::custom(format!("invalid time `{text}`: {err}")))
    }
}
