//! Submission gateway.
//!
//! Validates the identity, then either POSTs the payload once or, with no
//! endpoint configured, logs it and reports success. There are no retries:
//! a failure is returned once and the caller may resubmit.

use ready_core::{Action, Environment, Identity, Payload, Quiz, StateSink, VerdictLadder};
use serde::Serialize;

use crate::error::SubmitError;
use crate::transport::LeadTransport;

/// What happened to an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The webhook acknowledged the payload.
    Delivered { status: u16 },
    /// No webhook configured; the payload was only logged.
    Recorded,
}

pub struct SubmissionGateway<T> {
    transport: Option<T>,
}

impl<T: LeadTransport> SubmissionGateway<T> {
    /// Gateway that forwards to `transport`.
    pub const fn forwarding(transport: T) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// Gateway that only logs payloads.
    pub const fn demo() -> Self {
        Self { transport: None }
    }

    pub const fn is_demo(&self) -> bool {
        self.transport.is_none()
    }

    /// Validate `identity` and deliver the payload it belongs to.
    ///
    /// `build_payload` is only called once validation has passed, so a
    /// rejected identity never produces or sends anything.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Validation`] for a bad identity; transport errors
    /// otherwise.
    pub async fn submit<F>(
        &self,
        identity: &Identity,
        build_payload: F,
    ) -> Result<SubmitOutcome, SubmitError>
    where
        F: FnOnce() -> Payload,
    {
        identity.validate()?;
        let payload = build_payload();

        let Some(transport) = &self.transport else {
            let body = serde_json::to_string(&payload)?;
            tracing::info!(payload = %body, "lead payload recorded (no lead-capture endpoint configured)");
            return Ok(SubmitOutcome::Recorded);
        };

        tracing::debug!(target_url = transport.target(), "posting lead payload");
        match transport.post(&payload).await {
            Ok(status) => {
                tracing::info!(status, "lead payload delivered");
                Ok(SubmitOutcome::Delivered { status })
            }
            Err(error) => {
                tracing::warn!(%error, "lead submission failed");
                Err(error)
            }
        }
    }
}

/// Run one submission against a quiz, keeping its `submitting` flag honest.
///
/// The flag is raised before validation and always lowered before
/// returning. On failure the user-facing message is stored in the quiz
/// state as well as returned.
///
/// # Errors
///
/// [`SubmitError::InFlight`] when a submission is already running, and any
/// error from [`SubmissionGateway::submit`].
pub async fn submit_quiz<S, T>(
    quiz: &mut Quiz<S>,
    gateway: &SubmissionGateway<T>,
    ladder: &VerdictLadder,
    env: &Environment,
) -> Result<SubmitOutcome, SubmitError>
where
    S: StateSink,
    T: LeadTransport,
{
    quiz.apply(Action::BeginSubmit)
        .map_err(|_| SubmitError::InFlight)?;

    let identity = quiz.state().identity();
    let result = gateway
        .submit(&identity, || quiz.payload(ladder, env))
        .await;

    let finish = match &result {
        Ok(_) => Ok(()),
        Err(error) => Err(error.user_message()),
    };
    // FinishSubmit is infallible; the quiz only rejects BeginSubmit.
    if let Err(error) = quiz.apply(Action::FinishSubmit(finish)) {
        tracing::error!(%error, "failed to clear submitting state");
    }

    result
}
