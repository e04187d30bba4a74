use ready_core::{Scorecard, Verdict};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ScoreResponse {
    #[serde(flatten)]
    scorecard: Scorecard,
    verdict: Verdict,
}

/// Handle `aiready score`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ladder = ctx.ladder.clone();
    let quiz = ctx.quiz();
    let scorecard = quiz.scorecard();
    let verdict = ladder.classify(scorecard.total).clone();
    output(&ScoreResponse { scorecard, verdict }, flags.format)
}
