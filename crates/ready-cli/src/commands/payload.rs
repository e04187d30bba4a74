use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `aiready payload`. Builds a fresh payload; nothing is sent.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let env = ctx.environment();
    let ladder = ctx.ladder.clone();
    let quiz = ctx.quiz();
    output(&quiz.payload(&ladder, &env), flags.format)
}
