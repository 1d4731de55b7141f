//! Meeting repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered meeting collection for the lifetime of the process.
//! - Serve list/lookup/filter reads and whole-record upserts.
//!
//! # Invariants
//! - Meeting ids are unique within one store.
//! - Meeting order never changes after construction.
//! - A failed upsert leaves the collection untouched.

use crate::model::meeting::{Meeting, MeetingId, MeetingValidationError};
use crate::model::record::{current_timestamp, MeetingRecord};
use crate::seed::{parse_meetings, seeded_meetings, SeedError};
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Meeting store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(MeetingId),
    DuplicateMeeting(MeetingId),
    InvalidRecord {
        id: MeetingId,
        reason: MeetingValidationError,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "meeting not found: {id}"),
            Self::DuplicateMeeting(id) => write!(f, "duplicate meeting id: {id}"),
            Self::InvalidRecord { id, reason } => {
                write!(f, "invalid record for meeting {id}: {reason}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRecord { reason, .. } => Some(reason),
            Self::NotFound(_) | Self::DuplicateMeeting(_) => None,
        }
    }
}

/// Repository interface for meeting reads and record writes.
pub trait MeetingRepository {
    /// All meetings in seeded order.
    fn list(&self) -> &[Meeting];

    /// Looks up one meeting by id.
    fn get_by_id(&self, id: &MeetingId) -> Option<&Meeting>;

    /// Meetings dated within `[start, end]`, inclusive. Empty when
    /// `start > end`.
    fn filter_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Meeting>;

    /// Meetings that have no record yet.
    fn filter_missing_record(&self) -> Vec<&Meeting>;

    /// Replaces the record of `id`, stamping `last_updated` with `at`.
    ///
    /// # Errors
    /// - `NotFound` when no meeting has `id`.
    /// - `InvalidRecord` when the record lists no topic.
    ///
    /// Nothing is mutated on error.
    fn upsert_record_at(
        &mut self,
        id: &MeetingId,
        record: MeetingRecord,
        at: NaiveDateTime,
    ) -> RepoResult<&Meeting>;

    /// Replaces the record of `id`, stamping `last_updated` with now.
    fn upsert_record(&mut self, id: &MeetingId, record: MeetingRecord) -> RepoResult<&Meeting> {
        self.upsert_record_at(id, record, current_timestamp())
    }
}

/// Meeting store backed by a `Vec` owned for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMeetingRepository {
    meetings: Vec<Meeting>,
}

impl InMemoryMeetingRepository {
    /// Builds a store from meetings in the given order.
    ///
    /// # Errors
    /// - `DuplicateMeeting` when two meetings share an id.
    pub fn new(meetings: Vec<Meeting>) -> RepoResult<Self> {
        let mut seen = HashSet::with_capacity(meetings.len());
        for meeting in &meetings {
            if !seen.insert(&meeting.id) {
                return Err(RepoError::DuplicateMeeting(meeting.id.clone()));
            }
        }
        Ok(Self { meetings })
    }

    /// Builds a store holding the embedded seed dataset.
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::new(seeded_meetings()?)?)
    }

    /// Builds a store from a JSON meeting document.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(Self::new(parse_meetings(json)?)?)
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}

impl MeetingRepository for InMemoryMeetingRepository {
    fn list(&self) -> &[Meeting] {
        &self.meetings
    }

    fn get_by_id(&self, id: &MeetingId) -> Option<&Meeting> {
        self.meetings.iter().find(|meeting| &meeting.id == id)
    }

    fn filter_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Meeting> {
        self.meetings
            .iter()
            .filter(|meeting| meeting.falls_within(start, end))
            .collect()
    }

    fn filter_missing_record(&self) -> Vec<&Meeting> {
        self.meetings
            .iter()
            .filter(|meeting| !meeting.has_record())
            .collect()
    }

    fn upsert_record_at(
        &mut self,
        id: &MeetingId,
        mut record: MeetingRecord,
        at: NaiveDateTime,
    ) -> RepoResult<&Meeting> {
        let meeting = self
            .meetings
            .iter_mut()
            .find(|meeting| &meeting.id == id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;

        record.last_updated = at;
        meeting
            .replace_record(record)
            .map_err(|reason| RepoError::InvalidRecord {
                id: id.clone(),
                reason,
            })?;
        debug!("event=record_upsert module=repo status=ok meeting_id={id}");
        Ok(meeting)
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryMeetingRepository, MeetingRepository, RepoError};
    use crate::model::meeting::{Meeting, MeetingId, MeetingValidationError};
    use crate::model::record::MeetingRecord;
    use chrono::{NaiveDate, NaiveTime};

    fn meeting(id: &str, day: u32) -> Meeting {
        Meeting::new(
            id,
            "CS 1",
            "Cryptography",
            NaiveDate::from_ymd_opt(2025, 5, day).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err =
            InMemoryMeetingRepository::new(vec![meeting("a", 1), meeting("a", 2)]).unwrap_err();
        assert_eq!(err, RepoError::DuplicateMeeting(MeetingId::from("a")));
    }

    #[test]
    fn reversed_range_is_empty() {
        let repo = InMemoryMeetingRepository::new(vec![meeting("a", 10)]).unwrap();
        let start = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 5, 8).unwrap();
        assert!(repo.filter_by_date_range(start, end).is_empty());
    }

    #[test]
    fn upsert_without_topics_keeps_previous_state() {
        let mut repo = InMemoryMeetingRepository::new(vec![meeting("a", 10)]).unwrap();
        let at = NaiveDate::from_ymd_opt(2025, 5, 10)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap();
        let record = MeetingRecord {
            summary: "Covered modular arithmetic".to_string(),
            topics_covered: vec!["  ".to_string()],
            student_progress: "Followed along fine".to_string(),
            next_steps: None,
            attendance: "0/0 students attended".to_string(),
            last_updated: at,
        };

        let err = repo
            .upsert_record_at(&MeetingId::from("a"), record, at)
            .unwrap_err();
        assert_eq!(
            err,
            RepoError::InvalidRecord {
                id: MeetingId::from("a"),
                reason: MeetingValidationError::EmptyTopics,
            }
        );
        assert!(!repo.list()[0].has_record());
    }

    #[test]
    fn empty_store_reports_empty() {
        let repo = InMemoryMeetingRepository::default();
        assert!(repo.is_empty());
        assert!(repo.list().is_empty());
        assert!(repo.filter_missing_record().is_empty());
    }
}
