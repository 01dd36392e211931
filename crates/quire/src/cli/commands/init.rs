//! Implementation of `quire init`.

use std::{fs, process::ExitCode};

use quire_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};
use quire_highlight::Highlighter;

use crate::cli::{args::InitCommand, context::CommandContext};

/// Writes a commented `.quire.toml` template.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let cwd = &ctx.cwd;

    let in_home = global_config_path()
        .and_then(|p| p.parent().map(|h| h == cwd))
        .unwrap_or(false);
    let use_global = cmd.global || in_home;

    let config_path = if use_global {
        let Some(path) = global_config_path() else {
            eprintln!("error: could not determine home directory");
            return ExitCode::FAILURE;
        };
        path
    } else {
        cwd.join(CONFIG_FILENAME)
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = if use_global {
        global_template()
    } else {
        local_template()
    };

    if let Err(e) = fs::write(&config_path, &template) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());
    if ctx.palette.is_enabled() {
        println!();
        print!("{}", Highlighter::new().highlight_toml(&template));
    }
    ExitCode::SUCCESS
}
