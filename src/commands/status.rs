//! Status command implementation
//!
//! Lists every library reference in the project with its URL, the revision it
//! tracks and whether its source directory exists yet.

use anyhow::Result;
use clap::Args;
use console::style;
use std::path::{Path, PathBuf};

use libref::reference::LibraryReference;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Project directory to inspect
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Additional path segment to exclude from scanning (repeatable)
    #[arg(long = "ignore", value_name = "SEGMENT")]
    pub ignore: Vec<String>,
}

/// Execute the status command
pub fn execute(args: StatusArgs) -> Result<()> {
    if !args.path.is_dir() {
        anyhow::bail!("Project directory not found: {}", args.path.display());
    }

    let lib_refs = super::library_references(&args.path, &args.ignore, false)?;
    let references = lib_refs.iter_all()?;

    if references.is_empty() {
        println!("No library references found in {}", args.path.display());
        return Ok(());
    }

    for library in &references {
        println!("{}", describe(library, &args.path)?);
    }

    let unresolved = references.iter().filter(|lib| !lib.is_resolved()).count();
    println!();
    println!(
        "{} libraries, {} unresolved",
        references.len(),
        unresolved
    );
    if let Some(line) = ignored_summary(lib_refs.ignore_paths()) {
        println!("{}", line);
    }
    Ok(())
}

/// The footer naming skipped path segments, if there are any.
fn ignored_summary(ignore_paths: &[String]) -> Option<String> {
    if ignore_paths.is_empty() {
        None
    } else {
        Some(format!("Ignoring: {}", ignore_paths.join(", ")))
    }
}

/// One status line for `library`, with its path shown relative to `root`.
fn describe(library: &LibraryReference, root: &Path) -> Result<String> {
    let git_reference = library.get_git_reference()?;
    let path = library
        .reference_file
        .strip_prefix(root)
        .unwrap_or(&library.reference_file);
    let revision = git_reference
        .revision
        .unwrap_or_else(|| "default branch".to_string());
    let state = if library.is_resolved() {
        style("resolved").green()
    } else {
        style("unresolved").yellow()
    };

    Ok(format!(
        "{}  {} @ {}  [{}]",
        path.display(),
        git_reference.repo_url,
        revision,
        state
    ))
}
