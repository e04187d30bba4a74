use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use ready_core::Payload;
use ready_core::csv::{CSV_MIME_TYPE, export_file_name, to_csv};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExportResponse {
    path: String,
    mime_type: &'static str,
    bytes: usize,
}

enum Destination {
    Stdout,
    File(PathBuf),
}

fn destination(out: Option<&str>, payload: &Payload) -> Destination {
    match out {
        Some("-") => Destination::Stdout,
        Some(path) => Destination::File(PathBuf::from(path)),
        None => Destination::File(PathBuf::from(export_file_name(payload))),
    }
}

/// Write the export bytes unchanged. The CSV has no trailing newline and none
/// is added, so piping to a file matches `--out <path>` byte for byte.
fn emit(csv: &str, out: &mut impl Write) -> std::io::Result<()> {
    out.write_all(csv.as_bytes())?;
    out.flush()
}

/// Handle `aiready export`. Independent of submission: no identity checks.
pub fn handle(args: &ExportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let env = ctx.environment();
    let ladder = ctx.ladder.clone();
    let quiz = ctx.quiz();
    let payload = quiz.payload(&ladder, &env);
    let csv = to_csv(quiz.catalog(), &payload);

    match destination(args.out.as_deref(), &payload) {
        Destination::Stdout => emit(&csv, &mut std::io::stdout().lock())
            .context("failed to write CSV export to stdout"),
        Destination::File(path) => {
            std::fs::write(&path, &csv)
                .with_context(|| format!("failed to write CSV export to {}", path.display()))?;
            tracing::info!(path = %path.display(), "CSV export written");
            output(
                &ExportResponse {
                    path: path.display().to_string(),
                    mime_type: CSV_MIME_TYPE,
                    bytes: csv.len(),
                },
                flags.format,
            )
        }
    }
}
