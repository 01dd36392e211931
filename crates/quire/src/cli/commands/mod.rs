//! Command implementations and dispatch.

pub mod aggregate;
pub mod check;
pub mod config;
pub mod init;
pub mod list;
pub mod search;
pub mod show;
pub mod status;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub async fn run(command: &Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::List(cmd) => list::run(ctx, cmd).await,
        Commands::Search(cmd) => search::run(ctx, cmd).await,
        Commands::Show(cmd) => show::run(ctx, cmd).await,
        Commands::Categories(cmd) => aggregate::run(ctx, aggregate::Kind::Categories, cmd).await,
        Commands::Tags(cmd) => aggregate::run(ctx, aggregate::Kind::Tags, cmd).await,
        Commands::Status => status::run(ctx).await,
        Commands::Check => check::run(ctx).await,
        Commands::Config => config::run(ctx),
        Commands::Init(cmd) => init::run(ctx, cmd),
    }
}
