//! Include/exclude pattern compilation and matching.
//!
//! Compiles the `[posts]` glob patterns into matchers that decide which files under the posts
//! directory are posts.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::{ConfigError, PostsSettings};

/// Compiled glob patterns for the posts directory.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    /// Files must match at least one of these.
    include: GlobSet,
    /// Files matching any of these are dropped.
    exclude: GlobSet,
}

impl CompiledPatterns {
    /// Compiles the include/exclude patterns of a `[posts]` section.
    pub fn compile(posts: &PostsSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            include: build_set(&posts.include, "include")?,
            exclude: build_set(&posts.exclude, "exclude")?,
        })
    }

    /// Compiles an explicit pattern list, with no excludes.
    pub fn from_include<S: AsRef<str>>(include: &[S]) -> Result<Self, ConfigError> {
        let include: Vec<String> = include.iter().map(|s| s.as_ref().to_string()).collect();
        Ok(Self {
            include: build_set(&include, "include")?,
            exclude: GlobSet::empty(),
        })
    }

    /// Checks if a path relative to the posts directory is a post.
    ///
    /// A file matches if it matches at least one include pattern
    /// and does not match any exclude pattern.
    pub fn matches(&self, path: &Path) -> bool {
        self.include.is_match(path) && !self.exclude.is_match(path)
    }
}

/// Builds one glob set from a list of patterns.
fn build_set(patterns: &[String], kind: &str) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern)?);
    }
    builder.build().map_err(|source| ConfigError::InvalidPattern {
        pattern: format!("<combined {kind} patterns>"),
        source,
    })
}

/// Compiles a single glob pattern.
pub fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
