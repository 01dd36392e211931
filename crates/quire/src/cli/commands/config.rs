//! Implementation of `quire config`.

use std::process::ExitCode;

use quire_highlight::Highlighter;

use crate::cli::context::CommandContext;

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let toml = match ctx.config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if ctx.palette.is_enabled() {
        print!("{}", Highlighter::new().highlight_toml(&toml));
    } else {
        print!("{toml}");
    }
    ExitCode::SUCCESS
}
