//! Shared context for running CLI commands.

use std::{env, path::PathBuf, process::ExitCode};

use quire_config::Config;
use quire_highlight::Palette;
use quire_query::PageRequest;
use quire_store::{DirectorySource, DocumentStore};
use tracing::debug;

use crate::cli::args::PageArgs;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (defaults if no config files were found).
    pub config: Config,
    /// Styling for human-readable output.
    pub palette: Palette,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = Config::load(&cwd).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        debug!(
            files = config.files.len(),
            posts = %config.posts.path.display(),
            "loaded configuration"
        );
        Ok(Self {
            cwd,
            config,
            palette: Palette::detect(),
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        Ok(Self {
            cwd: current_dir_or_failure()?,
            config: Config::default(),
            palette: Palette::detect(),
        })
    }

    /// Opens the document store over the configured posts directory.
    pub async fn open_store(&self) -> Result<DocumentStore<DirectorySource>, ExitCode> {
        let source = DirectorySource::from_config(&self.config).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
        DocumentStore::open(source).await.map_err(|e| {
            eprintln!("error: {e}");
            eprintln!("Run 'quire init' to create a configuration file, or set [posts] path.");
            ExitCode::FAILURE
        })
    }

    /// Builds a page request from CLI flags, defaulting the size from config.
    pub fn page_request(&self, paging: &PageArgs) -> Result<PageRequest, ExitCode> {
        let size = paging.page_size.unwrap_or(self.config.listing.page_size);
        PageRequest::new(paging.page, size).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}
