//! Submission error types.

use ready_core::IdentityError;
use thiserror::Error;

/// Shown for every failure that is not an identity problem.
pub const GENERIC_FAILURE_MESSAGE: &str = "Submission failed. Please try again.";

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Name, email or consent rejected before anything was sent.
    #[error(transparent)]
    Validation(#[from] IdentityError),

    /// Another submission has not finished yet.
    #[error("a submission is already in progress")]
    InFlight,

    /// HTTP transport error (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("lead capture rejected the submission ({status}): {message}")]
    Rejected {
        /// HTTP status code returned by the webhook.
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// The payload could not be encoded as JSON.
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SubmitError {
    /// Message suitable for showing next to the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(error) => error.to_string(),
            Self::InFlight | Self::Http(_) | Self::Rejected { .. } | Self::Encode(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
