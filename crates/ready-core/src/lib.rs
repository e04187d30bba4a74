//! # ready-core
//!
//! Core logic for the AI-readiness marketing operations checklist.
//!
//! - Static question catalog (sections and items)
//! - Answer values and the scoring engine
//! - Verdict ladder
//! - Identity validation
//! - Payload assembly and CSV export
//! - The checklist state machine with an injected persistence sink

pub mod answer;
pub mod catalog;
pub mod csv;
pub mod errors;
pub mod identity;
pub mod payload;
pub mod quiz;
pub mod scoring;
pub mod verdict;

pub use answer::{AnswerValue, Answers};
pub use catalog::{Catalog, Item, Section};
pub use errors::{CoreError, IdentityError};
pub use identity::Identity;
pub use payload::{Environment, Payload};
pub use quiz::{Action, NullSink, PersistedField, Quiz, QuizState, StateSink};
pub use scoring::Scorecard;
pub use verdict::{Verdict, VerdictLadder};

/// Scheduling page offered once a score has been produced.
pub const DEFAULT_SCHEDULE_URL: &str = "https://tidycal.com/tonyawalker/20-minute-strategy-session";
