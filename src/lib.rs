//! # libref
//!
//! This library resolves the library references of an embedded-firmware
//! project. A library reference is a `<name>.lib` file holding a git URL and
//! an optional `#<revision>`; resolving it means cloning that repository into
//! the sibling `<name>/` directory and checking out the requested revision.
//! It is designed to be used by the `libref` command-line tool but can also be
//! embedded in other tooling.
//!
//! ## Quick Example
//!
//! ```
//! use libref::reference::GitReference;
//!
//! let reference = GitReference::parse("https://github.com/example/driver#v1.2.0").unwrap();
//! assert_eq!(reference.repo_url, "https://github.com/example/driver");
//! assert_eq!(reference.revision.as_deref(), Some("v1.2.0"));
//! ```
//!
//! ## Core Concepts
//!
//! - **References (`reference`)**: One descriptor file on disk and the
//!   directory its source belongs in. Resolved means that directory exists.
//! - **Source control (`repository`, `git`)**: The `GitOperations` adapter
//!   trait and its system-`git` implementation.
//! - **Revision selection (`resolver`)**: Pinned revision or live default
//!   branch, with a narrow fetch for pinned revisions.
//! - **Reference sets (`libraries`)**: The fixed-point `fetch` loop and the
//!   `checkout` pass over a whole project tree.
//! - **Configuration (`config`, `defaults`)**: Optional `.libref.yaml` per
//!   project.
//! - **Build (`build`)**: CMake generation and build invocation for a deployed
//!   project.

pub mod build;
pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod libraries;
pub mod reference;
pub mod repository;
pub mod resolver;

#[cfg(test)]
mod reference_proptest;
