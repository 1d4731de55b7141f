//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate draft prefill, validation and store writes for record forms.
//! - Keep UI callers decoupled from store details.

pub mod meeting_service;
