//! Implementation of `quire list`.

use std::process::ExitCode;

use quire_query::paginate;

use crate::cli::{args::ListCommand, context::CommandContext, output::print_page};

/// Prints one page of posts, newest first.
pub async fn run(ctx: &CommandContext, cmd: &ListCommand) -> ExitCode {
    let request = match ctx.page_request(&cmd.paging) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let store = match ctx.open_store().await {
        Ok(s) => s,
        Err(code) => return code,
    };

    let collection = store.list_all().await;
    let page = paginate(&collection.posts, request);
    print_page(&ctx.palette, &page, cmd.json)
}
