//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use quire_document::{Post, PostMetadata};
use quire_highlight::Palette;
use quire_query::{Page, canonical_url};
use serde::Serialize;

/// A post as emitted by `quire show --json`.
#[derive(Serialize)]
struct JsonPost<'a> {
    /// The post with its body.
    #[serde(flatten)]
    post: &'a Post,
    /// Canonical absolute URL.
    url: String,
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints a post with its canonical URL as JSON.
pub fn print_post_json(post: &Post, base_url: &str) -> ExitCode {
    print_json(&JsonPost {
        post,
        url: canonical_url(base_url, &post.meta.slug),
    })
}

/// Formats a reading time for display.
pub fn format_reading_time(minutes: u32) -> String {
    format!("{minutes} min read")
}

/// Formats the date, reading time, category and tags of a post on one line.
pub fn format_details(palette: &Palette, meta: &PostMetadata) -> String {
    let mut parts = vec![palette.dim(&format!(
        "{} · {}",
        meta.date,
        format_reading_time(meta.reading_time)
    ))];
    if let Some(category) = &meta.category {
        parts.push(palette.category(category));
    }
    parts.extend(meta.tags.iter().map(|t| palette.tag(t)));
    parts.join(" ")
}

/// Formats one post as a listing entry: title line, details line, excerpt line.
pub fn format_listing_entry(palette: &Palette, meta: &PostMetadata) -> String {
    format!(
        "{} {} {}\n    {}\n    {}\n",
        palette.badge(&meta.initial()),
        palette.header(&meta.title),
        palette.dim(&format!("({})", meta.slug)),
        format_details(palette, meta),
        meta.excerpt
    )
}

/// Formats the pager footer, e.g. `page 1 of 2 · 7 posts`.
pub fn format_page_footer<T>(page: &Page<T>) -> String {
    let noun = if page.total_items == 1 { "post" } else { "posts" };
    format!(
        "page {} of {} · {} {noun}",
        page.page, page.total_pages, page.total_items
    )
}

/// Prints a page of posts, as JSON or as a human-readable listing.
pub fn print_page<T>(palette: &Palette, page: &Page<T>, json: bool) -> ExitCode
where
    T: AsRef<PostMetadata> + Serialize,
{
    if json {
        return print_json(page);
    }

    if page.items.is_empty() {
        println!("{}", palette.dim("No posts found."));
    }
    for item in &page.items {
        println!("{}", format_listing_entry(palette, item.as_ref()));
    }
    println!("{}", palette.dim(&format_page_footer(page)));
    ExitCode::SUCCESS
}

/// Prints a list of distinct values, one per line, or as a JSON array.
pub fn print_values(palette: &Palette, values: &[String], empty: &str, json: bool) -> ExitCode {
    if json {
        return print_json(values);
    }
    if values.is_empty() {
        println!("{}", palette.dim(empty));
    }
    for value in values {
        println!("{value}");
    }
    ExitCode::SUCCESS
}

/// Formats the heading block printed above a post body by `quire show`.
pub fn format_post_heading(palette: &Palette, meta: &PostMetadata, url: &str) -> String {
    let mut out = format!("{}\n", palette.header(&meta.title));
    if let Some(author) = &meta.author {
        out.push_str(&format!("{} {author}\n", palette.label("by")));
    }
    out.push_str(&format!("{}\n", format_details(palette, meta)));
    if let Some(cover) = &meta.cover_image {
        out.push_str(&format!("{} {}\n", palette.label("cover:"), palette.dim(cover)));
    }
    out.push_str(&format!("{}\n", palette.dim(url)));
    out
}
