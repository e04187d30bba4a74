use ready_core::Action;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ResetResponse {
    reset: bool,
    store: String,
}

/// Handle `aiready reset`: clears answers, identity and step in the store.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = ctx.store_dir.display().to_string();
    ctx.quiz().apply(Action::Reset)?;
    tracing::info!(%store, "checklist state reset");
    output(&ResetResponse { reset: true, store }, flags.format)
}
