//! Meeting use-case service.
//!
//! # Responsibility
//! - Provide list/detail/filter entry points for the meeting screen.
//! - Run the write/edit record flow: prefill, split topics, validate, upsert.
//!
//! # Invariants
//! - A draft is validated before any store write.
//! - Rejected saves (invalid draft or unknown meeting) never mutate the store.
//! - Log events carry ids and counts only, never record text.

use crate::model::draft::RecordDraft;
use crate::model::meeting::{Meeting, MeetingId};
use crate::model::record::current_timestamp;
use crate::repo::meeting_repo::{MeetingRepository, RepoError};
use crate::validation::record::{validate_record, RecordValidation};
use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for meeting use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingServiceError {
    /// Draft failed one or more field rules.
    Validation(RecordValidation),
    /// Target meeting does not exist.
    MeetingNotFound(MeetingId),
    /// Store-level failure other than not-found.
    Repo(RepoError),
}

impl Display for MeetingServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(validation) => write!(f, "{validation}"),
            Self::MeetingNotFound(id) => write!(f, "meeting not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MeetingServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(validation) => Some(validation),
            Self::Repo(err) => Some(err),
            Self::MeetingNotFound(_) => None,
        }
    }
}

impl From<RepoError> for MeetingServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::MeetingNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Meeting service facade over repository implementations.
pub struct MeetingService<R: MeetingRepository> {
    repo: R,
}

impl<R: MeetingRepository> MeetingService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_meetings(&self) -> &[Meeting] {
        self.repo.list()
    }

    pub fn get_meeting(&self, id: &MeetingId) -> Option<&Meeting> {
        self.repo.get_by_id(id)
    }

    /// Meetings dated within `[start, end]`, inclusive.
    pub fn meetings_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Meeting> {
        self.repo.filter_by_date_range(start, end)
    }

    pub fn meetings_needing_records(&self) -> Vec<&Meeting> {
        self.repo.filter_missing_record()
    }

    /// Returns prefilled form state for the selected meeting.
    pub fn draft_for(&self, id: &MeetingId) -> Result<RecordDraft, MeetingServiceError> {
        self.repo
            .get_by_id(id)
            .map(RecordDraft::for_meeting)
            .ok_or_else(|| MeetingServiceError::MeetingNotFound(id.clone()))
    }

    /// Validates `draft` and saves it as the meeting record, stamped now.
    pub fn save_record(
        &mut self,
        id: &MeetingId,
        draft: &RecordDraft,
    ) -> Result<&Meeting, MeetingServiceError> {
        self.save_record_at(id, draft, current_timestamp())
    }

    /// Validates `draft` and saves it as the meeting record stamped with `at`.
    ///
    /// # Errors
    /// - `Validation` with every failing field when the draft is invalid.
    /// - `MeetingNotFound` when `id` is unknown.
    pub fn save_record_at(
        &mut self,
        id: &MeetingId,
        draft: &RecordDraft,
        at: NaiveDateTime,
    ) -> Result<&Meeting, MeetingServiceError> {
        let validation = validate_record(&draft.to_candidate());
        if !validation.is_valid {
            let fields = validation
                .errors
                .keys()
                .map(|field| field.as_str())
                .collect::<Vec<_>>()
                .join(",");
            warn!(
                "event=record_save module=service status=invalid meeting_id={id} fields={fields}"
            );
            return Err(MeetingServiceError::Validation(validation));
        }

        let is_edit = match self.repo.get_by_id(id) {
            Some(meeting) => meeting.has_record(),
            None => {
                warn!("event=record_save module=service status=not_found meeting_id={id}");
                return Err(MeetingServiceError::MeetingNotFound(id.clone()));
            }
        };

        let record = draft.to_record(at);
        let topic_count = record.topics_covered.len();
        let meeting = self.repo.upsert_record_at(id, record, at)?;
        info!(
            "event=record_save module=service status=ok meeting_id={} mode={} topics={}",
            id,
            if is_edit { "edit" } else { "create" },
            topic_count
        );
        Ok(meeting)
    }
}
