use ready_core::{Action, AnswerValue};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnswerArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AnswerResponse {
    item: String,
    answer: AnswerValue,
    section: &'static str,
    section_score: f64,
    total: f64,
    completion: u8,
}

/// Handle `aiready answer`.
pub fn handle(args: &AnswerArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut quiz = ctx.quiz();
    quiz.apply(Action::Answer {
        item_id: args.item.clone(),
        value: args.value,
    })?;

    let section = quiz
        .catalog()
        .find_item(&args.item)
        .map_or("", |(section, _)| section.id);
    let scorecard = quiz.scorecard();
    let section_score = scorecard
        .sections
        .iter()
        .find(|line| line.id == section)
        .map_or(0.0, |line| line.score);

    tracing::debug!(item = %args.item, answer = %args.value, "answer recorded");
    output(
        &AnswerResponse {
            item: args.item.clone(),
            answer: args.value,
            section,
            section_score,
            total: scorecard.total,
            completion: scorecard.completion,
        },
        flags.format,
    )
}
