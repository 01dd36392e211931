//! CLI integration tests for quire commands.
//!
//! Output is captured through a pipe, so styling is off and text can be matched directly.

#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Writes `content` to `rel_path` under `root`, creating parent directories.
fn write(root: &Path, rel_path: &str, content: impl AsRef<[u8]>) {
    let path = root.join(rel_path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Helper to get a quire command.
fn quire() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quire").unwrap()
}

/// Helper to run `quire` in `cwd` with HOME isolated to `home`.
fn quire_in(cwd: &Path, home: &Path) -> Command {
    let mut cmd = quire();
    cmd.current_dir(cwd).env("HOME", home).env_remove("QUIRE_LOG");
    cmd
}

/// A project directory and a separate, empty home directory.
struct Blog {
    /// Project root holding `.quire.toml` and `posts/`.
    root: tempfile::TempDir,
    /// Isolated home directory.
    home: tempfile::TempDir,
}

impl Blog {
    /// A blog with three dated posts and a draft.
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write(
            root.path(),
            ".quire.toml",
            "root = true\n\n[site]\ntitle = \"Field Notes\"\ndescription = \"Bread and borrow checking\"\nlanguage = \"en-GB\"\nbase_url = \"https://blog.example.com/\"\n\n[posts]\nexclude = \"drafts/**\"\n\n[listing]\npage_size = 2\n",
        );
        write(
            root.path(),
            "posts/hello-world.md",
            "---\ntitle: Hello, World\ndate: 2025-01-01\nauthor: Sam\ncategory: Life\ntags: [intro]\n---\nFirst post on the new blog.",
        );
        write(
            root.path(),
            "posts/2025/async-rust.md",
            "---\ntitle: Async Rust\ndate: 2025-06-01\ncategory: Rust\ntags: [async, tokio]\n---\n# Futures\n\nPolling all the way down.",
        );
        write(
            root.path(),
            "posts/sourdough.md",
            "---\ntitle: Sourdough Notes\ndate: 2025-03-10\ncategory: Life\ntags: [bread]\nexcerpt: Starter, flour, patience.\n---\nFeed the starter daily.",
        );
        write(
            root.path(),
            "posts/drafts/wip.md",
            "---\ntitle: WIP\ndate: 2026-01-01\n---\nnot yet",
        );
        Self { root, home }
    }

    /// Runs quire from the project root.
    fn cmd(&self) -> Command {
        quire_in(self.root.path(), self.home.path())
    }

    /// Runs quire with `args` and parses stdout as JSON.
    fn json(&self, args: &[&str]) -> Value {
        let output = self.cmd().args(args).assert().success().get_output().clone();
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

mod list {
    use super::*;

    #[test]
    fn lists_newest_first_with_configured_page_size() {
        let blog = Blog::new();
        blog.cmd()
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("(A) Async Rust (2025/async-rust)"))
            .stdout(predicate::str::contains("(S) Sourdough Notes (sourdough)"))
            .stdout(predicate::str::contains("Hello, World").not())
            .stdout(predicate::str::contains("WIP").not())
            .stdout(predicate::str::contains("page 1 of 2 · 3 posts"));
    }

    #[test]
    fn second_page() {
        let blog = Blog::new();
        blog.cmd()
            .args(["list", "--page", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Hello, World"))
            .stdout(predicate::str::contains("2025-01-01 · 1 min read [Life] #intro"))
            .stdout(predicate::str::contains("page 2 of 2"));
    }

    #[test]
    fn page_beyond_end_is_empty() {
        let blog = Blog::new();
        blog.cmd()
            .args(["list", "-p", "9"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No posts found."));
    }

    #[test]
    fn json_page() {
        let blog = Blog::new();
        let page = blog.json(&["list", "--json", "-n", "10"]);
        assert_eq!(page["page"], 1);
        assert_eq!(page["pageSize"], 10);
        assert_eq!(page["totalItems"], 3);
        assert_eq!(page["totalPages"], 1);
        let slugs: Vec<_> = page["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["slug"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(slugs, vec!["2025/async-rust", "sourdough", "hello-world"]);
        assert_eq!(page["items"][1]["excerpt"], "Starter, flour, patience.");
        assert_eq!(page["items"][1]["readingTime"], 1);
        assert!(page["items"][0].get("content").is_none());
    }

    #[test]
    fn zero_page_is_an_error() {
        let blog = Blog::new();
        blog.cmd()
            .args(["list", "--page", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("page numbers start at 1"));
    }

    #[test]
    fn zero_page_size_is_an_error() {
        let blog = Blog::new();
        blog.cmd()
            .args(["list", "-n", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("page size must be at least 1"));
    }

    #[test]
    fn missing_posts_directory_fails() {
        let root = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write(root.path(), ".quire.toml", "root = true\n");

        quire_in(root.path(), home.path())
            .arg("list")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"))
            .stderr(predicate::str::contains("quire init"));
    }
}

mod search {
    use super::*;

    #[test]
    fn matches_tags_case_insensitively() {
        let blog = Blog::new();
        let page = blog.json(&["search", "TOKIO", "--json"]);
        assert_eq!(page["totalItems"], 1);
        assert_eq!(page["items"][0]["slug"], "2025/async-rust");
    }

    #[test]
    fn matches_category() {
        let blog = Blog::new();
        let page = blog.json(&["search", "life", "--json"]);
        assert_eq!(page["totalItems"], 2);
        assert_eq!(page["items"][0]["slug"], "sourdough");
        assert_eq!(page["items"][1]["slug"], "hello-world");
    }

    #[test]
    fn no_matches() {
        let blog = Blog::new();
        blog.cmd()
            .args(["search", "kubernetes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No posts found."))
            .stdout(predicate::str::contains("page 1 of 1 · 0 posts"));
    }

    #[test]
    fn empty_query_lists_everything() {
        let blog = Blog::new();
        let page = blog.json(&["search", "", "--json"]);
        assert_eq!(page["totalItems"], 3);
    }
}

mod show {
    use super::*;

    #[test]
    fn shows_heading_and_body() {
        let blog = Blog::new();
        blog.cmd()
            .args(["show", "hello-world"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Hello, World"))
            .stdout(predicate::str::contains("by Sam"))
            .stdout(predicate::str::contains(
                "https://blog.example.com/post/hello-world",
            ))
            .stdout(predicate::str::contains("First post on the new blog."));
    }

    #[test]
    fn nested_slug() {
        let blog = Blog::new();
        blog.cmd()
            .args(["show", "2025/async-rust"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Polling all the way down."));
    }

    #[test]
    fn raw_prints_only_body() {
        let blog = Blog::new();
        blog.cmd()
            .args(["show", "sourdough", "--raw"])
            .assert()
            .success()
            .stdout("Feed the starter daily.\n");
    }

    #[test]
    fn json_includes_content_and_url() {
        let blog = Blog::new();
        let post = blog.json(&["show", "sourdough", "--json"]);
        assert_eq!(post["slug"], "sourdough");
        assert_eq!(post["title"], "Sourdough Notes");
        assert_eq!(post["content"], "Feed the starter daily.");
        assert_eq!(post["url"], "https://blog.example.com/post/sourdough");
        assert_eq!(post["tags"], serde_json::json!(["bread"]));
    }

    #[test]
    fn unknown_slug_fails() {
        let blog = Blog::new();
        blog.cmd()
            .args(["show", "nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error: post not found: nope"));
    }

    #[test]
    fn excluded_draft_is_not_found() {
        let blog = Blog::new();
        blog.cmd()
            .args(["show", "drafts/wip"])
            .assert()
            .failure();
    }
}

mod aggregates {
    use super::*;

    #[test]
    fn categories_in_first_seen_order() {
        let blog = Blog::new();
        blog.cmd()
            .arg("categories")
            .assert()
            .success()
            .stdout("Rust\nLife\n");
    }

    #[test]
    fn tags_as_json() {
        let blog = Blog::new();
        let tags = blog.json(&["tags", "--json"]);
        assert_eq!(
            tags,
            serde_json::json!(["async", "tokio", "bread", "intro"])
        );
    }

    #[test]
    fn empty_collection() {
        let root = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write(root.path(), ".quire.toml", "root = true\n");
        fs::create_dir(root.path().join("posts")).unwrap();

        quire_in(root.path(), home.path())
            .arg("tags")
            .assert()
            .success()
            .stdout(predicate::str::contains("No tags."));
    }
}

mod status {
    use super::*;

    #[test]
    fn summarizes_configuration() {
        let blog = Blog::new();
        blog.cmd()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains(".quire.toml"))
            .stdout(predicate::str::contains("posts"))
            .stdout(predicate::str::contains("- drafts/**"))
            .stdout(predicate::str::contains("3 posts"));
    }

    #[test]
    fn shows_site_settings() {
        let blog = Blog::new();
        blog.cmd()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Field Notes (en-GB)"))
            .stdout(predicate::str::contains("Bread and borrow checking"))
            .stdout(predicate::str::contains("https://blog.example.com\n"));
    }

    #[test]
    fn without_config_files() {
        let root = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();

        quire_in(root.path(), home.path())
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("No configuration files found"))
            .stdout(predicate::str::contains("Quire (en)"))
            .stdout(predicate::str::contains("[missing]"));
    }
}

mod check {
    use super::*;

    #[test]
    fn clean_collection_passes() {
        let blog = Blog::new();
        blog.cmd()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("ok: 3 posts loaded"));
    }

    #[test]
    fn unreadable_post_fails() {
        let blog = Blog::new();
        write(blog.root.path(), "posts/binary.md", [0xff, 0xfe, 0x00]);

        blog.cmd()
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Failures (1):"))
            .stdout(predicate::str::contains("binary"))
            .stdout(predicate::str::contains("3 posts loaded, 1 failed"));
    }

    #[test]
    fn warnings_alone_pass() {
        let blog = Blog::new();
        write(
            blog.root.path(),
            ".quire.toml",
            "root = true\n\n[posts]\ninclude = [\"**/*.md\", \"**/*.markdown\"]\n",
        );

        blog.cmd()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("Warnings (1):"))
            .stdout(predicate::str::contains("**/*.markdown"));
    }
}

mod config {
    use super::*;

    #[test]
    fn shows_effective_settings() {
        let blog = Blog::new();
        blog.cmd()
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("https://blog.example.com"))
            .stdout(predicate::str::contains("example.com/").not())
            .stdout(predicate::str::contains("page_size = 2"));
    }

    #[test]
    fn invalid_config_fails() {
        let root = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write(root.path(), ".quire.toml", "root = true\n[listing\n");

        quire_in(root.path(), home.path())
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }

    #[test]
    fn global_config_applies() {
        let root = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write(home.path(), ".quire.toml", "[listing]\npage_size = 11\n");

        quire_in(root.path(), home.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("page_size = 11"));
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let root = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();

        quire_in(root.path(), home.path())
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created"));

        let contents = fs::read_to_string(root.path().join(".quire.toml")).unwrap();
        assert!(contents.contains("# [posts]"));
    }

    #[test]
    fn fails_if_config_exists() {
        let root = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write(root.path(), ".quire.toml", "existing");

        quire_in(root.path(), home.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--force"));
    }

    #[test]
    fn force_overwrites_broken_config() {
        let root = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write(root.path(), ".quire.toml", "not [valid toml");

        quire_in(root.path(), home.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(root.path().join(".quire.toml")).unwrap();
        assert!(contents.contains("# [listing]"));
    }

    #[test]
    fn global_writes_to_home() {
        let root = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();

        quire_in(root.path(), home.path())
            .args(["init", "--global"])
            .assert()
            .success();

        assert!(home.path().join(".quire.toml").exists());
        assert!(!root.path().join(".quire.toml").exists());
    }
}

#[test]
fn help_lists_subcommands() {
    quire()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("categories"));
}
