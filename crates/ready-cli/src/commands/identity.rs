use ready_core::{Action, Identity};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdentityArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct IdentityResponse {
    #[serde(flatten)]
    identity: Identity,
    /// Whether `submit` would pass validation.
    ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    problem: Option<String>,
}

/// Handle `aiready identity`. With no flags it only reports the stored values.
pub fn handle(args: &IdentityArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut quiz = ctx.quiz();
    for action in actions(args) {
        quiz.apply(action)?;
    }
    output(&response(quiz.state().identity()), flags.format)
}

fn actions(args: &IdentityArgs) -> Vec<Action> {
    let mut actions = Vec::new();
    if let Some(name) = &args.name {
        actions.push(Action::SetName(name.clone()));
    }
    if let Some(email) = &args.email {
        actions.push(Action::SetEmail(email.trim().to_string()));
    }
    if let Some(consent) = args.consent {
        actions.push(Action::SetConsent(consent));
    }
    actions
}

fn response(identity: Identity) -> IdentityResponse {
    let problem = identity.validate().err().map(|error| error.to_string());
    IdentityResponse {
        ready: problem.is_none(),
        problem,
        identity,
    }
}
