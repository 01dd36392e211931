//! Implementation of `quire check`.

use std::process::ExitCode;

use quire_config::ConfigWarning;
use quire_highlight::Palette;

use crate::cli::context::CommandContext;

/// Validates configuration and loads every post, reporting problems.
///
/// Warnings alone leave the exit status successful. Posts that fail to load, or a posts
/// directory that cannot be opened, make it fail.
pub async fn run(ctx: &CommandContext) -> ExitCode {
    let palette = &ctx.palette;

    let warnings = ctx.config.validate();
    print_warnings(palette, &warnings);

    let store = match ctx.open_store().await {
        Ok(s) => s,
        Err(code) => return code,
    };
    let collection = store.list_all().await;

    if collection.failures.is_empty() {
        println!(
            "{}",
            palette.success(&format!("ok: {} posts loaded", collection.len()))
        );
        return ExitCode::SUCCESS;
    }

    println!(
        "{}",
        palette.header(&format!("Failures ({}):", collection.failures.len()))
    );
    for failure in &collection.failures {
        println!(
            "   {} {}",
            palette.label(&failure.slug),
            palette.error(&failure.error.to_string())
        );
    }
    println!();
    println!(
        "{} posts loaded, {} failed",
        collection.len(),
        collection.failures.len()
    );
    ExitCode::FAILURE
}

/// Prints configuration warnings, if any.
fn print_warnings(palette: &Palette, warnings: &[ConfigWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!(
        "{}",
        palette.header(&format!("Warnings ({}):", warnings.len()))
    );
    for w in warnings {
        println!("   {}", palette.warning(&w.to_string()));
    }
    println!();
}
