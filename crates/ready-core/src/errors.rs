//! Error types raised by the checklist core.
//!
//! Transport and storage errors live in their own crates. The CLI converges
//! everything into `anyhow`.

use thiserror::Error;

/// Identity fields rejected at submission time.
///
/// The messages are shown to the person filling in the checklist, so they
/// are phrased as instructions rather than diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// Name is blank or the email does not look like `local@domain.tld`.
    #[error("Please enter a valid name and email.")]
    InvalidNameOrEmail,

    /// The consent box was not ticked.
    #[error("Please consent to receive your score via email.")]
    MissingConsent,
}

/// Errors that can be raised while driving the checklist.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An answer referenced an item id that is not in the catalog.
    #[error("Unknown checklist item: {0}")]
    UnknownItem(String),

    /// An answer string could not be parsed into an answer value.
    #[error("Invalid answer '{0}' (expected yes, in-progress or no)")]
    InvalidAnswer(String),

    /// A submission was started while another one is still in flight.
    #[error("A submission is already in progress")]
    SubmitInFlight,

    /// Identity validation failed.
    #[error(transparent)]
    Validation(#[from] IdentityError),
}
