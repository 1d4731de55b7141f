//! Repository layer for meeting data access.
//!
//! # Responsibility
//! - Define the use-case oriented meeting store contract.
//! - Provide the process-memory implementation seeded at start.
//!
//! # Invariants
//! - Record writes replace the whole record of exactly one meeting.
//! - Repository APIs return semantic errors (`NotFound`) without mutating.

pub mod meeting_repo;
