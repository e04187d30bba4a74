use anyhow::Context;
use ready_core::{Quiz, StateSink, Verdict};
use ready_submit::{SubmitOutcome, submit_quiz};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct SubmitResponse {
    #[serde(flatten)]
    outcome: SubmitOutcome,
    total: f64,
    max: usize,
    verdict: Verdict,
}

/// Submitting is only offered from the identity form.
fn ensure_identity_step<S: StateSink>(quiz: &Quiz<S>) -> anyhow::Result<()> {
    if quiz.is_identity_step() {
        return Ok(());
    }
    let identity_step = quiz.identity_step();
    anyhow::bail!(
        "submit is only available on the identity step (step {identity_step}); \
         run `aiready goto {identity_step}` first"
    )
}

const fn finish_message(outcome: &SubmitOutcome) -> &'static str {
    match outcome {
        SubmitOutcome::Delivered { .. } => "Score sent",
        SubmitOutcome::Recorded => "Score recorded (demo mode, nothing sent)",
    }
}

/// Handle `aiready submit`.
///
/// Validation failures are reported with the form message and never reach
/// the network. Transport failures are reported once; run the command again
/// to retry.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let gateway = ctx.gateway()?;
    let env = ctx.environment();
    let ladder = ctx.ladder.clone();
    let mut quiz = ctx.quiz();
    ensure_identity_step(&quiz)?;

    let spinner = Progress::spinner(if gateway.is_demo() {
        "Recording…"
    } else {
        "Sending…"
    });

    match submit_quiz(&mut quiz, &gateway, &ladder, &env).await {
        Ok(outcome) => {
            spinner.finish_ok(finish_message(&outcome));
            let scorecard = quiz.scorecard();
            output(
                &SubmitResponse {
                    outcome,
                    total: scorecard.total,
                    max: scorecard.max,
                    verdict: ladder.classify(scorecard.total).clone(),
                },
                flags.format,
            )
        }
        Err(error) => {
            let message = error.user_message();
            spinner.finish_err(&message);
            if error.is_validation() {
                anyhow::bail!(message);
            }
            Err(error).context(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use ready_core::{Action, Catalog, NullSink, QuizState};

    use super::*;

    #[test]
    fn submit_requires_the_identity_step() {
        let mut quiz = Quiz::new(Catalog::standard(), QuizState::default(), NullSink);
        let error = ensure_identity_step(&quiz).expect_err("step 0 is not the identity step");
        assert!(error.to_string().contains("aiready goto 5"));

        quiz.apply(Action::JumpTo(5)).expect("jump");
        assert!(ensure_identity_step(&quiz).is_ok());
    }

    #[test]
    fn spinner_message_reflects_the_outcome() {
        assert_eq!(finish_message(&SubmitOutcome::Delivered { status: 200 }), "Score sent");
        assert!(finish_message(&SubmitOutcome::Recorded).contains("demo mode"));
    }
}
