use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `aiready schema`: the JSON Schema of the webhook payload.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ready_core::payload::payload_schema(), flags.format)
}
