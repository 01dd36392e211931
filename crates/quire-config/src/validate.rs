//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, fs, path::Path};

use globset::GlobMatcher;

use crate::{Config, patterns::compile_glob};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The posts path does not exist.
    PostsPathMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The posts path exists but is not a directory.
    PostsPathNotDirectory {
        /// Path that is not a directory.
        path: String,
    },
    /// An include pattern doesn't match any files.
    IncludePatternMatchesNothing {
        /// Pattern that matched nothing.
        pattern: String,
    },
    /// `listing.page_size` is zero, so no listing can be paginated.
    ZeroPageSize,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PostsPathMissing { path } => write!(f, "posts path does not exist: {path}"),
            Self::PostsPathNotDirectory { path } => {
                write!(f, "posts path is not a directory: {path}")
            }
            Self::IncludePatternMatchesNothing { pattern } => {
                write!(f, "include pattern '{pattern}' matches no files")
            }
            Self::ZeroPageSize => write!(f, "listing page_size is 0"),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.listing.page_size == 0 {
        warnings.push(ConfigWarning::ZeroPageSize);
    }

    let path = &config.posts.path;
    if !path.exists() {
        warnings.push(ConfigWarning::PostsPathMissing {
            path: path.display().to_string(),
        });
        return warnings;
    }
    if !path.is_dir() {
        warnings.push(ConfigWarning::PostsPathNotDirectory {
            path: path.display().to_string(),
        });
        return warnings;
    }

    for pattern in &config.posts.include {
        if !pattern_matches_any_file(path, pattern) {
            warnings.push(ConfigWarning::IncludePatternMatchesNothing {
                pattern: pattern.clone(),
            });
        }
    }

    warnings
}

/// Checks if a glob pattern matches any file under `root`.
fn pattern_matches_any_file(root: &Path, pattern: &str) -> bool {
    // Invalid patterns surface as errors when the patterns are compiled.
    let Ok(glob) = compile_glob(pattern) else {
        return false;
    };
    walk_and_match(root, root, &glob.compile_matcher())
}

/// Recursively walks a directory and checks if any file matches.
fn walk_and_match(root: &Path, current: &Path, matcher: &GlobMatcher) -> bool {
    let Ok(entries) = fs::read_dir(current) else {
        return false;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        if path.is_file() && matcher.is_match(relative) {
            return true;
        }
        if path.is_dir() && walk_and_match(root, &path, matcher) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::test_support::Sandbox;

    fn config_for(path: PathBuf, include: &[&str]) -> Config {
        let mut config = Config::default();
        config.posts.path = path;
        config.posts.include = include.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn test_posts_path_missing() {
        let config = config_for(PathBuf::from("/nonexistent/quire/posts/12345"), &["**/*.md"]);
        let warnings = config.validate();
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::PostsPathMissing { .. }]
        ));
    }

    #[test]
    fn test_posts_path_is_file() {
        let dir = Sandbox::new();
        let file = dir.write("posts", "not a dir");
        let warnings = config_for(file, &["**/*.md"]).validate();
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::PostsPathNotDirectory { .. }]
        ));
    }

    #[test]
    fn test_pattern_matches_nothing() {
        let dir = Sandbox::new();
        dir.write("posts/notes.txt", "x");
        let warnings = config_for(dir.path().join("posts"), &["**/*.md"]).validate();
        assert_eq!(
            warnings,
            vec![ConfigWarning::IncludePatternMatchesNothing {
                pattern: "**/*.md".into()
            }]
        );
    }

    #[test]
    fn test_pattern_matches_nested_file() {
        let dir = Sandbox::new();
        dir.write("posts/2024/recap.md", "x");
        let warnings = config_for(dir.path().join("posts"), &["**/*.md"]).validate();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_zero_page_size() {
        let dir = Sandbox::new();
        dir.write("posts/a.md", "x");
        let mut config = config_for(dir.path().join("posts"), &["*.md"]);
        config.listing.page_size = 0;
        assert_eq!(config.validate(), vec![ConfigWarning::ZeroPageSize]);
    }

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::IncludePatternMatchesNothing {
            pattern: "*.md".into(),
        };
        assert_eq!(warning.to_string(), "include pattern '*.md' matches no files");
        assert_eq!(
            ConfigWarning::PostsPathMissing {
                path: "/x".into()
            }
            .to_string(),
            "posts path does not exist: /x"
        );
    }
}
