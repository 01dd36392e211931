//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving the posts path.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, ListingSettings, PostsSettings, SiteSettings,
    parse::{RawConfig, RawListingSettings, RawPostsSettings, RawSiteSettings},
    resolve::resolve_posts_path,
};

/// A parsed config file with its source path.
#[derive(Debug, Clone)]
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory the config file lives in. Relative paths inside it resolve from here.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Every key is merged independently and the highest-precedence file that sets it wins.
/// Pattern lists replace each other wholesale rather than concatenating.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    let mut site = SiteSettings::default();
    let mut posts = PostsSettings::default();
    let mut listing = ListingSettings::default();

    // Lowest precedence first so closer files overwrite.
    for parsed in configs.iter().rev() {
        if let Some(raw) = &parsed.config.site {
            apply_site(&mut site, raw);
        }
        if let Some(raw) = &parsed.config.posts {
            apply_posts(&mut posts, raw, parsed.dir())?;
        }
        if let Some(raw) = &parsed.config.listing {
            apply_listing(&mut listing, raw);
        }
    }

    site.base_url = site.base_url.trim_end_matches('/').to_string();

    Ok(Config {
        site,
        posts,
        listing,
        config_root: configs.first().map(|c| c.dir().to_path_buf()),
        files: configs.iter().map(|c| c.path.clone()).collect(),
    })
}

/// Applies the keys set in a raw `[site]` section.
fn apply_site(result: &mut SiteSettings, raw: &RawSiteSettings) {
    if let Some(v) = &raw.title {
        result.title.clone_from(v);
    }
    if let Some(v) = &raw.description {
        result.description.clone_from(v);
    }
    if let Some(v) = &raw.base_url {
        result.base_url.clone_from(v);
    }
    if let Some(v) = &raw.language {
        result.language.clone_from(v);
    }
}

/// Applies the keys set in a raw `[posts]` section declared in `config_dir`.
fn apply_posts(
    result: &mut PostsSettings,
    raw: &RawPostsSettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(path) = &raw.path {
        result.path = resolve_posts_path(path, config_dir)?;
    }
    if let Some(include) = &raw.include {
        result.include.clone_from(include);
    }
    if let Some(exclude) = &raw.exclude {
        result.exclude.clone_from(exclude);
    }
    Ok(())
}

/// Applies the keys set in a raw `[listing]` section.
fn apply_listing(result: &mut ListingSettings, raw: &RawListingSettings) {
    if let Some(v) = raw.page_size {
        result.page_size = v;
    }
}
