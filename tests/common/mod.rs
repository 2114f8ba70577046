//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_reference("app.lib", "https://git");
//!     fixture.command().arg("status").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::git_fixtures;
    pub use super::TestFixture;
}

/// A temporary project directory populated with reference files.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a library reference file with the given relative path and content.
    pub fn with_reference(self, path: &str, content: &str) -> Self {
        self.with_file(path, content)
    }

    /// Add a `.libref.yaml` configuration file with the given content.
    #[allow(dead_code)]
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(".libref.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add an empty directory.
    #[allow(dead_code)]
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command for the libref binary running in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("libref");
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Helpers that build local git repositories to clone from.
///
/// These need a `git` binary on `PATH`; tests using them are gated behind the
/// `integration-tests` feature.
#[allow(dead_code)]
pub mod git_fixtures {
    use super::*;

    /// Run git in `dir`, panicking on failure, and return trimmed stdout.
    pub fn git(dir: &Path, args: &[&str]) -> String {
        let output = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args([
                "-c",
                "user.name=libref tests",
                "-c",
                "user.email=tests@libref.invalid",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Create a repository at `dir` on branch `main` with `files` committed.
    pub fn init_repo(dir: &Path, files: &[(&str, &str)]) -> PathBuf {
        std::fs::create_dir_all(dir).expect("Failed to create repo dir");
        git(dir, &["init", "--quiet"]);
        git(dir, &["checkout", "--quiet", "-b", "main"]);
        commit_files(dir, files, "initial");
        dir.to_path_buf()
    }

    /// Write `files` and commit them, returning the new commit hash.
    pub fn commit_files(dir: &Path, files: &[(&str, &str)], message: &str) -> String {
        for (path, content) in files {
            let full_path = dir.join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create parent dir");
            }
            std::fs::write(&full_path, content).expect("Failed to write file");
        }
        git(dir, &["add", "--all"]);
        git(dir, &["commit", "--quiet", "--allow-empty", "-m", message]);
        git(dir, &["rev-parse", "HEAD"])
    }

    /// Name of the branch currently checked out in `dir`.
    pub fn current_branch(dir: &Path) -> String {
        git(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// A `file://` URL for a local repository.
    pub fn file_url(dir: &Path) -> String {
        format!("file://{}", dir.display())
    }
}
