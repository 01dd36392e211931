//! Clap argument definitions for the `quire` CLI.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(about = "Browse, search and check a directory of blog posts")]
#[command(version)]
pub struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Paging flags shared by listing commands.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(short = 'p', long, default_value_t = 1)]
    pub page: usize,

    /// Posts per page [default: listing.page_size from config]
    #[arg(short = 'n', long)]
    pub page_size: Option<usize>,
}

/// Arguments for `quire list`.
#[derive(Args, Debug, Clone)]
pub struct ListCommand {
    #[command(flatten)]
    /// Paging flags.
    pub paging: PageArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `quire search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Text to look for in titles, excerpts, categories and tags
    pub query: String,

    #[command(flatten)]
    /// Paging flags.
    pub paging: PageArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `quire show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// Post slug, e.g. `hello-world` or `2024/recap`
    pub slug: String,

    /// Output in JSON format
    #[arg(long, conflicts_with = "raw")]
    pub json: bool,

    /// Print only the body, unstyled
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for `quire categories` and `quire tags`.
#[derive(Args, Debug, Clone)]
pub struct AggregateCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `quire init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.quire.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `quire` subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts, newest first
    List(ListCommand),
    /// Search posts by title, excerpt, category or tag
    #[command(after_help = "\
Matching is a case-insensitive substring match. An empty query lists every post.

EXAMPLES:
  quire search rust
  quire search 'async' --page 2
  quire search bread --json")]
    Search(SearchCommand),
    /// Show a single post
    Show(ShowCommand),
    /// List distinct categories in first-seen order
    Categories(AggregateCommand),
    /// List distinct tags in first-seen order
    Tags(AggregateCommand),
    /// Show configuration files, posts directory and collection summary
    Status,
    /// Validate configuration and report posts that fail to load
    Check,
    /// Show effective configuration settings
    Config,
    /// Initialize quire configuration in the current directory
    Init(InitCommand),
}

impl Commands {
    /// Returns true if the command needs a loaded configuration.
    ///
    /// `init` has to work even when an existing config file is broken.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

/// Parses CLI arguments, exiting with usage on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
