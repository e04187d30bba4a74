use ready_core::Catalog;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// One item per row, for the table view.
#[derive(Debug, Serialize)]
struct CatalogRow {
    section: &'static str,
    id: &'static str,
    title: &'static str,
    question: &'static str,
}

/// Handle `aiready catalog`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => output(&rows(&ctx.catalog), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&ctx.catalog, flags.format),
    }
}

fn rows(catalog: &Catalog) -> Vec<CatalogRow> {
    catalog
        .sections()
        .iter()
        .flat_map(|section| {
            section.items.iter().map(|item| CatalogRow {
                section: section.id,
                id: item.id,
                title: item.title,
                question: item.question,
            })
        })
        .collect()
}
