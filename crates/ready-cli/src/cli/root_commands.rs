use clap::{Args, Subcommand};
use ready_core::AnswerValue;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List every section and item.
    Catalog,
    /// Show the current step.
    Show,
    /// Answer one item.
    Answer(AnswerArgs),
    /// Move to the next step.
    Next,
    /// Move to the previous step.
    Back,
    /// Jump to a step (clamped to the identity step).
    Goto(GotoArgs),
    /// Set name, email or consent for the score report.
    Identity(IdentityArgs),
    /// Scores, completion and verdict.
    Score,
    /// Results summary with per-section breakdown.
    Results,
    /// Print the payload that export and submit would use.
    Payload,
    /// Write the answers and scores as CSV.
    Export(ExportArgs),
    /// Validate identity and send the payload to the lead-capture webhook.
    ///
    /// Only available on the identity step (`aiready goto <sections>`).
    Submit,
    /// Open the strategy-session booking page.
    Schedule(ScheduleArgs),
    /// Clear all answers, identity and progress.
    Reset,
    /// Dump the JSON schema of the submitted payload.
    Schema,
}

/// Arguments for `aiready answer`.
#[derive(Clone, Debug, Args)]
pub struct AnswerArgs {
    /// Item id, e.g. `1.1`.
    pub item: String,
    /// yes, in-progress or no.
    pub value: AnswerValue,
}

/// Arguments for `aiready goto`.
#[derive(Clone, Debug, Args)]
pub struct GotoArgs {
    /// Zero-based step; the step after the last section is the identity step.
    pub step: usize,
}

/// Arguments for `aiready identity`.
#[derive(Clone, Debug, Args)]
pub struct IdentityArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Consent to receive the score by email.
    #[arg(long)]
    pub consent: Option<bool>,
}

/// Arguments for `aiready export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Output path, or `-` for stdout. Defaults to `ai_mops_checklist_<date>.csv`.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for `aiready schedule`.
#[derive(Clone, Debug, Args)]
pub struct ScheduleArgs {
    /// Print the link instead of opening a browser.
    #[arg(long)]
    pub print: bool,
}
