//! Pure validation rules applied before data enters the store.
//!
//! # Responsibility
//! - Check candidate records against field-presence and length rules.
//! - Report every failing field at once with a user-facing message.
//!
//! # Invariants
//! - Validation has no side effects and never panics.

pub mod record;
