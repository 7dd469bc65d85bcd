//! # dealfinder-resolve
//!
//! Maps a user's natural-language follow-up ("the blue one", "#2", "the
//! cheapest") onto specific previously numbered deals, with confidence and
//! ambiguity signaling, and fact-checks any claim made about a deal
//! against its structured fields.

pub mod facts;
mod matcher;
pub mod reference;
mod semantic;

pub use facts::{
    ClaimCheck, ClaimVerdict, FactField, FactVerifier, IssueKind, NarrativeIssue,
    NarrativeReport, Severity,
};
pub use matcher::{ReferenceResolver, AMBIGUITY_BAND, MAX_DETERMINISTIC_CANDIDATES};
