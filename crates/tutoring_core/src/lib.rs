//! Core domain logic for tutoring meeting records.
//! This crate is the single source of truth for meeting and record invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod settings;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::RecordDraft;
pub use model::meeting::{Meeting, MeetingId, MeetingValidationError, Student, StudentId};
pub use model::record::{join_topics, split_topics, MeetingRecord, RecordField};
pub use repo::meeting_repo::{InMemoryMeetingRepository, MeetingRepository, RepoError, RepoResult};
pub use seed::{seeded_meetings, SeedError};
pub use service::meeting_service::{MeetingService, MeetingServiceError};
pub use settings::CoreSettings;
pub use validation::record::{validate_record, RecordCandidate, RecordValidation};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
