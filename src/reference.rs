//! # Library Reference Records
//!
//! A library reference is a small descriptor file, conventionally
//! `<name>.lib`, whose content is a single repository URL optionally followed
//! by `#<revision>`:
//!
//! ```text
//! https://github.com/ARMmbed/mbed-client.git#28eeee2b4c169739192600b92e7970dbbcabd8d0
//! ```
//!
//! The revision may be a branch name or a full or partial commit hash. When it
//! is absent the library tracks the remote's default branch.
//!
//! A reference at `P/name.lib` resolves into the sibling directory `P/name/`.
//! Whether a reference is resolved is decided purely by that directory's
//! existence; records hold no state of their own and are rebuilt on every scan.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Separator between the repository URL and the pinned revision.
const REVISION_SEPARATOR: char = '#';

/// The parsed content of a library reference file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitReference {
    /// Remote repository URL, without the revision fragment.
    pub repo_url: String,
    /// Branch name or commit hash to pin to. `None` means the remote's
    /// default branch.
    pub revision: Option<String>,
}

impl GitReference {
    /// Parse descriptor content into a `GitReference`.
    ///
    /// Only the first non-blank line is considered. An empty fragment
    /// (`url#`) is treated as no revision.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let line = content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| "missing repository URL".to_string())?;

        let (url, revision) = match line.split_once(REVISION_SEPARATOR) {
            Some((url, revision)) => (url.trim(), Some(revision.trim())),
            None => (line, None),
        };

        if url.is_empty() {
            return Err("missing repository URL".to_string());
        }

        Ok(Self {
            repo_url: url.to_string(),
            revision: revision
                .filter(|revision| !revision.is_empty())
                .map(str::to_string),
        })
    }
}

/// One library dependency declared on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryReference {
    /// Path to the descriptor file.
    pub reference_file: PathBuf,
    /// Directory the library's source tree must live in.
    pub source_code_path: PathBuf,
}

impl LibraryReference {
    /// Create a record with an explicit source directory.
    pub fn new(reference_file: impl Into<PathBuf>, source_code_path: impl Into<PathBuf>) -> Self {
        Self {
            reference_file: reference_file.into(),
            source_code_path: source_code_path.into(),
        }
    }

    /// Create a record for a descriptor, deriving the source directory as the
    /// descriptor path without its extension.
    pub fn from_reference_file(reference_file: impl Into<PathBuf>) -> Self {
        let reference_file = reference_file.into();
        let source_code_path = reference_file.with_extension("");
        Self {
            reference_file,
            source_code_path,
        }
    }

    /// The library name, taken from the descriptor's base name.
    pub fn name(&self) -> String {
        self.reference_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Whether the library's source directory exists.
    pub fn is_resolved(&self) -> bool {
        self.source_code_path.is_dir()
    }

    /// Read and parse the descriptor file.
    pub fn get_git_reference(&self) -> Result<GitReference> {
        let content = fs::read_to_string(&self.reference_file)?;
        GitReference::parse(&content).map_err(|message| Error::Parse {
            path: self.reference_file.clone(),
            message,
        })
    }

    /// Whether any component of the descriptor path equals one of `ignore_paths`.
    pub fn is_ignored<S: AsRef<str>>(&self, ignore_paths: &[S]) -> bool {
        path_is_ignored(&self.reference_file, ignore_paths)
    }
}

/// Whether any component of `path` equals one of `ignore_paths`.
pub(crate) fn path_is_ignored<S: AsRef<str>>(path: &Path, ignore_paths: &[S]) -> bool {
    path.components().any(|component| {
        let component = component.as_os_str();
        ignore_paths
            .iter()
            .any(|ignored| component == ignored.as_ref())
    })
}
