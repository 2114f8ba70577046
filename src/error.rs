//! # Error Handling
//!
//! This module defines the centralized error type for `libref`. It uses the
//! `thiserror` library to derive a single `Error` enum covering every failure
//! the resolution engine and its collaborators can surface.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Each variant carries enough context (the
//!   reference file, URL, revision or working tree involved) to tell the user
//!   which library failed and why.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! The variants fall into these groups:
//!
//! - Malformed library reference files (`Parse`).
//! - Source-control failures: cloning (`Clone`), checking out a revision
//!   (`Checkout`) and any other git invocation such as a narrow fetch or a
//!   default-branch lookup (`GitCommand`).
//! - Build tool failures (`Build`).
//! - Project configuration problems (`Config`, `Yaml`).
//! - Filesystem access (`Io`, `Walk`).
//!
//! Nothing in the library retries on error. Every failure propagates to the
//! caller, which may simply run the operation again: resolution state is
//! re-derived from the filesystem on every call.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for libref operations
#[derive(Error, Debug)]
pub enum Error {
    /// A library reference file could not be parsed, usually because it does
    /// not contain a repository URL.
    #[error("Invalid library reference {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Cloning a library's repository failed.
    ///
    /// This covers unreachable remotes, authentication failures and clone
    /// destinations that already exist.
    #[error("Git clone error for {url} into {}: {message}", destination.display())]
    Clone {
        url: String,
        destination: PathBuf,
        message: String,
    },

    /// Checking out a revision or branch failed.
    ///
    /// Raised when the revision cannot be resolved, or when the working tree
    /// has local modifications and the checkout was not forced.
    #[error("Git checkout of '{revision}' failed in {}: {message}", path.display())]
    Checkout {
        path: PathBuf,
        revision: String,
        message: String,
    },

    /// Any other git invocation failed (fetch, remote queries, opening a repo).
    #[error("Git command failed in {}: {command} - {stderr}", path.display())]
    GitCommand {
        command: String,
        path: PathBuf,
        stderr: String,
    },

    /// The build generator or build tool failed, or the build directory is
    /// missing.
    #[error("Build error: {message}")]
    Build { message: String },

    /// The project configuration is well-formed YAML but holds invalid values.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A directory traversal error, wrapped from `walkdir::Error`.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
