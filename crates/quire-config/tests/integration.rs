//! Integration tests for quire-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> resolve -> merge.

#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use quire_config::{CONFIG_FILENAME, Config, ConfigError, ConfigWarning};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_root_config_only() {
    let env = TestEnv::new();
    env.create_file(CONFIG_FILENAME, "root = true\n");

    let config = Config::load(env.path()).unwrap();
    assert_eq!(config.files, vec![env.path().join(CONFIG_FILENAME)]);
    assert_eq!(config.posts.path, env.path().join("posts"));
    assert_eq!(config.listing.page_size, 6);
    assert_eq!(config.site.title, "Quire");
}

#[test]
fn test_load_nested_configs_merging() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        r#"
root = true

[site]
title = "Outer"
base_url = "https://example.com/"

[posts]
path = "content"

[listing]
page_size = 4
"#,
    );
    env.create_file(
        &format!("blog/{CONFIG_FILENAME}"),
        r#"
[site]
title = "Inner"
"#,
    );
    let cwd = env.create_dir("blog/drafts");

    let config = Config::load(&cwd).unwrap();
    assert_eq!(config.site.title, "Inner");
    assert_eq!(config.site.base_url, "https://example.com");
    assert_eq!(config.posts.path, env.path().join("content"));
    assert_eq!(config.listing.page_size, 4);
    assert_eq!(config.config_root, Some(env.path().join("blog")));
    assert_eq!(config.files.len(), 2);
}

#[test]
fn test_root_config_hides_outer_config() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        r#"
[listing]
page_size = 99
"#,
    );
    env.create_file(&format!("blog/{CONFIG_FILENAME}"), "root = true\n");

    let config = Config::load(&env.path().join("blog")).unwrap();
    assert_eq!(config.listing.page_size, 6);
}

#[test]
fn test_load_error_invalid_toml() {
    let env = TestEnv::new();
    env.create_file(CONFIG_FILENAME, "root = true\n[site\n");

    let result = Config::load(env.path());
    assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
}

#[test]
fn test_load_from_files_empty_list() {
    let config = Config::load_from_files(&[]).unwrap();
    assert!(config.files.is_empty());
    assert!(config.config_root.is_none());
}

#[test]
fn test_load_from_files_precedence() {
    let env = TestEnv::new();
    let high = env.create_file(
        "high.toml",
        r#"
[listing]
page_size = 2
"#,
    );
    let low = env.create_file(
        "low.toml",
        r#"
[listing]
page_size = 20

[site]
language = "zh-CN"
"#,
    );

    let config = Config::load_from_files(&[high, low]).unwrap();
    assert_eq!(config.listing.page_size, 2);
    assert_eq!(config.site.language, "zh-CN");
}

#[test]
fn test_compile_patterns_from_config() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        r#"
root = true

[posts]
include = ["**/*.md", "**/*.markdown"]
exclude = "drafts/**"
"#,
    );

    let config = Config::load(env.path()).unwrap();
    let patterns = config.compile_patterns().unwrap();
    assert!(patterns.matches(Path::new("a.md")));
    assert!(patterns.matches(Path::new("2024/b.markdown")));
    assert!(!patterns.matches(Path::new("drafts/c.md")));
}

#[test]
fn test_validate_loaded_config() {
    let env = TestEnv::new();
    env.create_file(CONFIG_FILENAME, "root = true\n");

    let warnings = Config::load(env.path()).unwrap().validate();
    assert!(matches!(
        warnings.as_slice(),
        [ConfigWarning::PostsPathMissing { .. }]
    ));

    env.create_file("posts/hello.md", "---\ntitle: Hi\n---\nBody");
    let warnings = Config::load(env.path()).unwrap().validate();
    assert!(warnings.is_empty());
}
