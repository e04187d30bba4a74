use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScheduleArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ScheduleResponse {
    url: String,
    opened: bool,
}

/// Handle `aiready schedule`.
pub fn handle(args: &ScheduleArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let url = ctx.config.links.schedule_url.clone();
    if !args.print {
        open::that(&url).with_context(|| format!("failed to open {url}"))?;
        tracing::debug!(%url, "opened booking page");
    }
    output(
        &ScheduleResponse {
            url,
            opened: !args.print,
        },
        flags.format,
    )
}
