//! # CLI Command Implementations
//!
//! Each subcommand of the `libref` tool lives in its own file and provides:
//! - An `Args` struct with the command-specific arguments, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and runs the command.
//!
//! Helpers shared by several commands are defined here.

pub mod deploy;
pub mod import;
pub mod status;

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use libref::config::load_project_config;
use libref::libraries::LibraryReferences;
use libref::repository::DefaultGitOperations;

/// Build the reference set for `root` from its `.libref.yaml`, with CLI overrides.
pub(crate) fn library_references(
    root: &Path,
    extra_ignore: &[String],
    parallel: bool,
) -> Result<LibraryReferences> {
    let mut config = load_project_config(root)
        .with_context(|| format!("Failed to load configuration in {}", root.display()))?;
    config.ignore_paths.extend(extra_ignore.iter().cloned());
    config.parallel |= parallel;

    Ok(LibraryReferences::from_config(
        root,
        &config,
        Box::new(DefaultGitOperations),
    ))
}

/// Resolve all references, then pin every resolved one to its declared revision.
pub(crate) fn deploy(lib_refs: &LibraryReferences, force: bool, quiet: bool) -> Result<()> {
    lib_refs.fetch().context("Failed to resolve library references")?;
    lib_refs
        .checkout(force)
        .context("Failed to check out library references")?;

    if !quiet {
        let count = lib_refs.iter_resolved()?.len();
        println!(
            "{} {} {} deployed in {}",
            style("✔").green(),
            count,
            if count == 1 { "library" } else { "libraries" },
            lib_refs.root().display()
        );
    }
    Ok(())
}
