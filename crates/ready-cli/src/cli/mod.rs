use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `aiready` binary.
#[derive(Debug, Parser)]
#[command(
    name = "aiready",
    version,
    about = "AI-readiness checklist for marketing operations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// State directory (defaults to the configured store dir)
    #[arg(short, long, global = true)]
    pub store: Option<String>,

    /// Page URL recorded in the payload; its query string becomes `utm`
    #[arg(short, long, global = true)]
    pub url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            store: self.store.clone(),
            url: self.url.clone(),
        }
    }
}
