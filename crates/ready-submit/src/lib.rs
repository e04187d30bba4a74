//! # ready-submit
//!
//! Lead submission for the checklist: identity validation, then a single
//! JSON POST to the configured lead-capture webhook. With no webhook
//! configured the gateway runs in demo mode and only logs the payload.

mod error;
mod gateway;
mod http;
mod transport;

pub use error::{GENERIC_FAILURE_MESSAGE, SubmitError};
pub use gateway::{SubmissionGateway, SubmitOutcome, submit_quiz};
pub use transport::{HttpTransport, LeadTransport};
