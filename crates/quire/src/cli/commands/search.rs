//! Implementation of `quire search`.

use std::process::ExitCode;

use quire_query::paginate;

use crate::cli::{args::SearchCommand, context::CommandContext, output::print_page};

/// Filters posts by the query, then prints one page of the matches.
pub async fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let request = match ctx.page_request(&cmd.paging) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let store = match ctx.open_store().await {
        Ok(s) => s,
        Err(code) => return code,
    };

    let collection = store.list_all().await;
    let hits = collection.search(&cmd.query);
    let page = paginate(&hits, request);
    print_page(&ctx.palette, &page, cmd.json)
}
