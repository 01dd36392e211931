//! Implementation of `quire status`.

use std::process::ExitCode;

use quire_config::format_path_for_display;
use quire_store::{DirectorySource, DocumentStore};

use crate::cli::context::CommandContext;

/// Shows configuration files, site settings, the posts directory, patterns and a collection
/// summary.
pub async fn run(ctx: &CommandContext) -> ExitCode {
    let palette = &ctx.palette;
    let config = &ctx.config;
    let cwd = &ctx.cwd;

    if config.files.is_empty() {
        println!("{}", palette.dim("No configuration files found, using defaults."));
        println!(
            "Run {} to create a configuration file.",
            palette.header("quire init")
        );
    } else {
        println!("{}", palette.header("Config files:"));
        for path in &config.files {
            println!("   {}", format_path_for_display(path, cwd));
        }
    }
    println!();

    let site = &config.site;
    println!("{}", palette.header("Site:"));
    println!(
        "   {} {}",
        palette.label(&site.title),
        palette.dim(&format!("({})", site.language))
    );
    if !site.description.is_empty() {
        println!("   {}", site.description);
    }
    println!("   {}", palette.dim(&site.base_url));
    println!();

    let posts_path = format_path_for_display(&config.posts.path, cwd);
    println!("{}", palette.header("Posts directory:"));
    if config.posts.path.is_dir() {
        println!("   {posts_path}");
    } else {
        println!("   {posts_path} {}", palette.warning("[missing]"));
    }
    println!();

    println!("{}", palette.header("Patterns:"));
    for pattern in &config.posts.include {
        println!("   + {pattern}");
    }
    for pattern in &config.posts.exclude {
        println!("   - {pattern}");
    }
    println!();

    println!("{}", palette.header("Collection:"));
    let opened = match DirectorySource::from_config(config) {
        Ok(source) => DocumentStore::open(source).await,
        Err(e) => Err(e),
    };
    match opened {
        Ok(store) => {
            let collection = store.list_all().await;
            let noun = if collection.len() == 1 { "post" } else { "posts" };
            println!("   {} {noun}", collection.len());
            if !collection.failures.is_empty() {
                println!(
                    "   {}",
                    palette.warning(&format!(
                        "{} failed to load (run 'quire check' for details)",
                        collection.failures.len()
                    ))
                );
            }
        }
        Err(e) => println!("   {}", palette.warning(&format!("unavailable: {e}"))),
    }

    let warnings = config.validate();
    if !warnings.is_empty() {
        println!();
        println!(
            "{}",
            palette.header(&format!("Warnings ({}):", warnings.len()))
        );
        for w in &warnings {
            println!("   {}", palette.warning(&w.to_string()));
        }
    }

    ExitCode::SUCCESS
}
