//! # Library Reference Set
//!
//! `LibraryReferences` resolves every library reference file under a project
//! root into a checked-out repository, including references that only appear
//! once other libraries have been cloned.
//!
//! ## Process
//!
//! 1.  **Scan**: Walk the root for reference files, skipping `.git`
//!     directories and any path with a component listed in `ignore_paths`
//!     (e.g. `mbed-os`, which manages its own nested references).
//!
//! 2.  **Resolve**: Clone every unresolved reference into its source
//!     directory. References that pin a revision are fetched and checked out
//!     to it immediately; the others stay on whatever the clone produced.
//!
//! 3.  **Repeat**: Freshly cloned sources may contain reference files of their
//!     own, so the scan runs again until a pass finds nothing unresolved.
//!
//! Nothing is remembered between passes or calls. A reference is resolved
//! exactly when its source directory exists, so an interrupted `fetch` can be
//! re-run and will pick up where it stopped.
//!
//! `checkout` re-pins already resolved references to their declared revision
//! or to the remote's current default branch. It never clones.
//!
//! The loop has no iteration bound. Libraries that reference each other in a
//! cycle keep nesting new copies and do not terminate.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use crate::config::ProjectConfig;
use crate::defaults::REFERENCE_FILE_EXTENSION;
use crate::error::{Error, Result};
use crate::reference::{path_is_ignored, LibraryReference};
use crate::repository::{DefaultGitOperations, GitOperations};
use crate::resolver;

/// The set of library references found under a project root.
pub struct LibraryReferences {
    root: PathBuf,
    ignore_paths: Vec<String>,
    extension: String,
    parallel: bool,
    git_ops: Box<dyn GitOperations>,
}

impl LibraryReferences {
    /// Creates a reference set backed by the system `git` command.
    pub fn new<S: Into<String>>(
        root: impl Into<PathBuf>,
        ignore_paths: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::with_operations(root, ignore_paths, Box::new(DefaultGitOperations))
    }

    /// Creates a reference set with a custom `GitOperations` implementation.
    pub fn with_operations<S: Into<String>>(
        root: impl Into<PathBuf>,
        ignore_paths: impl IntoIterator<Item = S>,
        git_ops: Box<dyn GitOperations>,
    ) -> Self {
        Self {
            root: root.into(),
            ignore_paths: ignore_paths.into_iter().map(Into::into).collect(),
            extension: REFERENCE_FILE_EXTENSION.to_string(),
            parallel: false,
            git_ops,
        }
    }

    /// Creates a reference set from project configuration.
    pub fn from_config(
        root: impl Into<PathBuf>,
        config: &ProjectConfig,
        git_ops: Box<dyn GitOperations>,
    ) -> Self {
        Self::with_operations(root, config.ignore_paths.iter().cloned(), git_ops)
            .with_extension(&config.reference_extension)
            .with_parallel(config.parallel)
    }

    /// Sets the reference file extension (without the leading dot).
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Resolves the references of each pass on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ignore_paths(&self) -> &[String] {
        &self.ignore_paths
    }

    /// Clones every unresolved reference, repeating until none are left.
    pub fn fetch(&self) -> Result<()> {
        let mut pass = 0usize;
        loop {
            let unresolved = self.iter_unresolved()?;
            if unresolved.is_empty() {
                debug!(
                    "All library references under {} resolved after {} pass(es)",
                    self.root.display(),
                    pass
                );
                return Ok(());
            }

            pass += 1;
            debug!(
                "Pass {}: resolving {} library reference(s)",
                pass,
                unresolved.len()
            );

            if self.parallel {
                unresolved
                    .par_iter()
                    .try_for_each(|library| self.resolve(library))?;
            } else {
                for library in &unresolved {
                    self.resolve(library)?;
                }
            }
        }
    }

    /// Checks out every resolved reference to its declared revision, or to the
    /// remote's default branch when none is declared.
    pub fn checkout(&self, force: bool) -> Result<()> {
        for library in self.iter_all()? {
            if !library.is_resolved() {
                warn!(
                    "Skipping checkout of unresolved library {}",
                    library.reference_file.display()
                );
                continue;
            }
            let git_reference = library.get_git_reference()?;
            resolver::checkout_reference(self.git_ops.as_ref(), &library, &git_reference, force)?;
        }
        Ok(())
    }

    /// Every reference file outside the ignore paths.
    pub fn iter_all(&self) -> Result<Vec<LibraryReference>> {
        self.scan()
    }

    /// References whose source directory exists.
    pub fn iter_resolved(&self) -> Result<Vec<LibraryReference>> {
        Ok(self
            .scan()?
            .into_iter()
            .filter(LibraryReference::is_resolved)
            .collect())
    }

    /// References whose source directory does not exist yet.
    pub fn iter_unresolved(&self) -> Result<Vec<LibraryReference>> {
        Ok(self
            .scan()?
            .into_iter()
            .filter(|library| !library.is_resolved())
            .collect())
    }

    fn resolve(&self, library: &LibraryReference) -> Result<()> {
        if library.is_resolved() {
            debug!("{} already resolved", library.name());
            return Ok(());
        }

        let git_reference = library.get_git_reference()?;
        info!(
            "Resolving library reference {} from {}",
            library.name(),
            git_reference.repo_url
        );

        self.git_ops
            .clone_repo(&git_reference.repo_url, &library.source_code_path)?;

        if !library.is_resolved() {
            return Err(Error::Clone {
                url: git_reference.repo_url,
                destination: library.source_code_path.clone(),
                message: "clone did not create the destination".to_string(),
            });
        }

        resolver::pin_after_clone(self.git_ops.as_ref(), library, &git_reference)
    }

    fn scan(&self) -> Result<Vec<LibraryReference>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !is_git_dir(entry) && !path_is_ignored(entry.path(), &self.ignore_paths)
            });

        let mut references = Vec::new();
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() && self.is_reference_file(entry.path()) {
                references.push(LibraryReference::from_reference_file(entry.into_path()));
            }
        }
        Ok(references)
    }

    fn is_reference_file(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|extension| extension == self.extension.as_str())
    }
}

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == ".git"
}
