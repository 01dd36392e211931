//! Configuration system for quire.
//!
//! quire uses TOML configuration files named `.quire.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.quire.toml` files
//! found, then loading `~/.quire.toml` as the global config with lowest precedence.
//!
//! ```
//! use quire_config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.listing.page_size, 6);
//! assert_eq!(config.posts.include, vec!["**/*.md"]);
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod patterns;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawListingSettings, RawPostsSettings, RawSiteSettings, parse_config_file,
    parse_config_str,
};
pub use patterns::CompiledPatterns;
pub use resolve::{format_path_for_display, resolve_posts_path};
use serde::Serialize;
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default posts directory name.
pub const DEFAULT_POSTS_DIR: &str = "posts";

/// Default include pattern when none is configured.
pub const DEFAULT_INCLUDE_PATTERN: &str = "**/*.md";

/// Default number of posts per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Top-level merged configuration for quire.
///
/// This is the fully resolved configuration after merging all discovered `.quire.toml` files
/// according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Site identity, used for canonical links.
    pub site: SiteSettings,
    /// Where posts live and which files count as posts.
    pub posts: PostsSettings,
    /// Listing defaults.
    pub listing: ListingSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
    /// Config files that contributed, highest precedence first.
    pub files: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.quire.toml` files.
    ///
    /// A relative posts path that no config file declared is anchored at `cwd`.
    ///
    /// Returns the defaults (posts in `cwd/posts`) if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        let mut config = Self::load_from_files(&config_files)?;
        if config.posts.path.is_relative() {
            config.posts.path = cwd.join(&config.posts.path);
        }
        Ok(config)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Compiles the include/exclude patterns of the `[posts]` section.
    pub fn compile_patterns(&self) -> Result<CompiledPatterns, ConfigError> {
        CompiledPatterns::compile(&self.posts)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A posts path that doesn't exist or isn't a directory
    /// - Include patterns that don't match any files
    /// - A zero page size
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML, in the same shape as a `.quire.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            site: &self.site,
            posts: &self.posts,
            listing: &self.listing,
        };
        toml::to_string_pretty(&serializable).map_err(|source| ConfigError::SerializeToml { source })
    }
}

/// The `[site]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSettings {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Base URL for canonical post links, without a trailing slash.
    pub base_url: String,
    /// Content language tag.
    pub language: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: String::from("Quire"),
            description: String::new(),
            base_url: String::from("http://localhost"),
            language: String::from("en"),
        }
    }
}

/// The `[posts]` section with its path resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostsSettings {
    /// Posts directory. Absolute once loaded through [`Config::load`].
    pub path: PathBuf,
    /// Include globs, relative to the posts directory.
    pub include: Vec<String>,
    /// Exclude globs, relative to the posts directory.
    pub exclude: Vec<String>,
}

impl Default for PostsSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_POSTS_DIR),
            include: vec![DEFAULT_INCLUDE_PATTERN.to_string()],
            exclude: Vec::new(),
        }
    }
}

/// The `[listing]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingSettings {
    /// Posts per page.
    pub page_size: usize,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Borrowed view of the settings sections for TOML output.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Site section.
    site: &'a SiteSettings,
    /// Posts section.
    posts: &'a PostsSettings,
    /// Listing section.
    listing: &'a ListingSettings,
}
