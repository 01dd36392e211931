//! Command-line interface for quire.

mod cli;

use std::process::ExitCode;

use cli::{args::parse_cli, commands, context::CommandContext, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let ctx = if cli.command.needs_config() {
        CommandContext::load()
    } else {
        CommandContext::load_cwd_only()
    };
    match ctx {
        Ok(ctx) => commands::run(&cli.command, &ctx).await,
        Err(code) => code,
    }
}
