use ready_core::Action;

use crate::cli::GlobalFlags;
use crate::commands::show::step_view;
use crate::context::AppContext;
use crate::output::output;

/// Handle `aiready next`, `aiready back` and `aiready goto`.
///
/// Moves past either end are clamped, so `next` on the identity step and
/// `back` on the first section are no-ops.
pub fn handle(action: Action, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut quiz = ctx.quiz();
    quiz.apply(action)?;
    output(&step_view(&quiz), flags.format)
}
