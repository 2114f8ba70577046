//! Import command implementation
//!
//! Clones a project repository into a new directory and deploys its library
//! references, so the project is ready to build in one step.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use libref::reference::GitReference;
use libref::repository::{DefaultGitOperations, GitOperations, ORIGIN};

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// URL of the project repository
    #[arg(value_name = "URL")]
    pub url: String,

    /// Destination directory (defaults to the repository name)
    #[arg(value_name = "DST")]
    pub dst: Option<PathBuf>,

    /// Only clone the project, leave its library references unresolved
    #[arg(long)]
    pub skip_resolve: bool,

    /// Clone the libraries of each pass concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the import command
pub fn execute(args: ImportArgs) -> Result<()> {
    let git_reference = GitReference::parse(&args.url).map_err(|message| {
        anyhow::anyhow!("Invalid repository URL {}: {}", args.url, message)
    })?;

    let dst = match args.dst {
        Some(dst) => dst,
        None => PathBuf::from(repo_name_from_url(&git_reference.repo_url).with_context(|| {
            format!("Cannot derive a directory name from {}", args.url)
        })?),
    };

    if dst.exists() {
        anyhow::bail!("Destination already exists: {}", dst.display());
    }

    if !args.quiet {
        println!("Cloning {} into {}", git_reference.repo_url, dst.display());
    }
    let git_ops = DefaultGitOperations;
    git_ops.clone_repo(&git_reference.repo_url, &dst)?;

    if let Some(revision) = &git_reference.revision {
        let repo = git_ops.get_repo(&dst)?;
        git_ops.fetch(&repo, ORIGIN, revision)?;
        git_ops.checkout(&repo, revision, false)?;
    }

    if args.skip_resolve {
        return Ok(());
    }

    let lib_refs = super::library_references(&dst, &[], args.parallel)?;
    super::deploy(&lib_refs, false, args.quiet)
}

/// Last path segment of a repository URL, without a `.git` suffix.
fn repo_name_from_url(url: &str) -> Option<String> {
    let last = url
        .trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()?
        .trim_end_matches(".git");
    if last.is_empty() {
        None
    } else {
        Some(last.to_string())
    }
}
