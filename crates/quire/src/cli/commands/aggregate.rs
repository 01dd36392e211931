//! Implementation of `quire categories` and `quire tags`.

use std::process::ExitCode;

use crate::cli::{args::AggregateCommand, context::CommandContext, output::print_values};

/// Which distinct values to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Post categories.
    Categories,
    /// Post tags.
    Tags,
}

/// Prints distinct categories or tags in first-seen order.
pub async fn run(ctx: &CommandContext, kind: Kind, cmd: &AggregateCommand) -> ExitCode {
    let store = match ctx.open_store().await {
        Ok(s) => s,
        Err(code) => return code,
    };

    let (values, empty) = match kind {
        Kind::Categories => (store.categories().await, "No categories."),
        Kind::Tags => (store.tags().await, "No tags."),
    };
    print_values(&ctx.palette, &values, empty, cmd.json)
}
