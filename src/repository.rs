//! # Source-Control Adapter
//!
//! This module defines the boundary between the resolution engine and the
//! version-control system it drives. The engine never runs `git` itself; it
//! talks to a `GitOperations` implementation.
//!
//! ## Design
//!
//! - **`GitOperations`**: the adapter contract. Clone, open a working tree,
//!   look up the remote's default branch, fetch one revision and check out a
//!   revision.
//!
//! - **`RepoHandle`**: an opened working tree. Handles are only produced by
//!   `get_repo`, so anything holding one has already been cloned.
//!
//! - **`DefaultGitOperations`**: the production implementation, which wraps
//!   the system `git` command via the functions in `crate::git`.
//!
//! In tests, a call-recording mock (`mock::MockGitOperations`) stands in for
//! the real adapter so the engine can be exercised without a network.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

/// Name of the remote a fresh clone is configured with.
pub const ORIGIN: &str = "origin";

/// An opened working tree of an already-cloned repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoHandle {
    path: PathBuf,
}

impl RepoHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Root of the working tree.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Trait for source-control operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Clones `url` into `destination`.
    ///
    /// Must fail if the destination already exists, and must create the
    /// destination directory on success.
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<()>;

    /// Opens the working tree at `path`.
    fn get_repo(&self, path: &Path) -> Result<RepoHandle>;

    /// Queries the remote's current default branch.
    fn get_default_branch(&self, repo: &RepoHandle) -> Result<String>;

    /// Fetches only `revision` from `remote`.
    ///
    /// A fetched branch also updates its remote-tracking ref, so a following
    /// `checkout` of the branch name can create the local branch. Succeeds
    /// when the remote refuses `revision` but it already resolves to a local
    /// commit, as abbreviated hashes do.
    fn fetch(&self, repo: &RepoHandle, remote: &str, revision: &str) -> Result<()>;

    /// Checks out `revision`. Without `force`, local modifications make this fail.
    fn checkout(&self, repo: &RepoHandle, revision: &str, force: bool) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command to perform real Git operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<()> {
        crate::git::clone(url, destination)
    }

    fn get_repo(&self, path: &Path) -> Result<RepoHandle> {
        crate::git::open(path)?;
        Ok(RepoHandle::new(path))
    }

    fn get_default_branch(&self, repo: &RepoHandle) -> Result<String> {
        crate::git::default_branch(repo.path(), ORIGIN)
    }

    fn fetch(&self, repo: &RepoHandle, remote: &str, revision: &str) -> Result<()> {
        match crate::git::fetch(repo.path(), remote, revision) {
            Ok(()) => Ok(()),
            Err(error) if crate::git::has_commit(repo.path(), revision) => {
                debug!(
                    "{} is already present in {}, ignoring failed fetch: {}",
                    revision,
                    repo.path().display(),
                    error
                );
                Ok(())
            }
            Err(error) => Err(error),
        }
    }

    fn checkout(&self, repo: &RepoHandle, revision: &str, force: bool) -> Result<()> {
        crate::git::checkout(repo.path(), revision, force)
    }
}
