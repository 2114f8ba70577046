//! Deploy command implementation
//!
//! Clones every unresolved library reference under the project (including
//! references that appear inside freshly cloned libraries), then checks out
//! each library at the revision its reference file declares.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the deploy command
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Project directory to deploy
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Discard local modifications in library working trees
    #[arg(short, long)]
    pub force: bool,

    /// Additional path segment to exclude from scanning (repeatable)
    #[arg(long = "ignore", value_name = "SEGMENT")]
    pub ignore: Vec<String>,

    /// Clone the libraries of each pass concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the deploy command
pub fn execute(args: DeployArgs) -> Result<()> {
    if !args.path.is_dir() {
        anyhow::bail!("Project directory not found: {}", args.path.display());
    }

    let lib_refs = super::library_references(&args.path, &args.ignore, args.parallel)?;
    super::deploy(&lib_refs, args.force, args.quiet)
}
