//! Implementation of `quire show`.

use std::process::ExitCode;

use quire_highlight::Highlighter;
use quire_query::canonical_url;

use crate::cli::{
    args::ShowCommand,
    context::CommandContext,
    output::{format_post_heading, print_post_json},
};

/// Width of the rule between heading and body.
const RULE_WIDTH: usize = 60;

/// Prints a single post.
pub async fn run(ctx: &CommandContext, cmd: &ShowCommand) -> ExitCode {
    let store = match ctx.open_store().await {
        Ok(s) => s,
        Err(code) => return code,
    };

    let post = match store.get(&cmd.slug).await {
        Ok(Some(post)) => post,
        Ok(None) => {
            eprintln!("error: post not found: {}", cmd.slug);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let base_url = &ctx.config.site.base_url;
    if cmd.json {
        return print_post_json(&post, base_url);
    }
    if cmd.raw {
        println!("{}", post.content);
        return ExitCode::SUCCESS;
    }

    let palette = &ctx.palette;
    let url = canonical_url(base_url, &post.meta.slug);
    print!("{}", format_post_heading(palette, &post.meta, &url));
    println!("{}", palette.rule(RULE_WIDTH));
    if palette.is_enabled() {
        println!("{}", Highlighter::new().highlight_markdown(&post.content));
    } else {
        println!("{}", post.content);
    }
    ExitCode::SUCCESS
}
