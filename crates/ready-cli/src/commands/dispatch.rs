use ready_core::Action;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Catalog => commands::catalog::handle(ctx, flags),
        Commands::Show => commands::show::handle(ctx, flags),
        Commands::Answer(args) => commands::answer::handle(&args, ctx, flags),
        Commands::Next => commands::navigate::handle(Action::Next, ctx, flags),
        Commands::Back => commands::navigate::handle(Action::Back, ctx, flags),
        Commands::Goto(args) => commands::navigate::handle(Action::JumpTo(args.step), ctx, flags),
        Commands::Identity(args) => commands::identity::handle(&args, ctx, flags),
        Commands::Score => commands::score::handle(ctx, flags),
        Commands::Results => commands::results::handle(ctx, flags),
        Commands::Payload => commands::payload::handle(ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Submit => commands::submit::handle(ctx, flags).await,
        Commands::Schedule(args) => commands::schedule::handle(&args, ctx, flags),
        Commands::Reset => commands::reset::handle(ctx, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
