//! Domain model for tutoring meetings and their session records.
//!
//! # Responsibility
//! - Define the meeting, roster and record shapes shared by store and service.
//! - Enforce structural invariants at construction and deserialization.
//!
//! # Invariants
//! - A meeting has a record iff `Meeting::record()` is `Some`.
//! - A meeting roster is fixed once the meeting is constructed.
//! - Records are replaced wholesale, never merged field by field.

pub mod draft;
pub mod meeting;
pub mod record;
