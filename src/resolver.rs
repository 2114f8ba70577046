//! Revision selection for resolved library references.
//!
//! A reference either pins a revision in its URL fragment or follows the
//! remote's default branch. Either way the target is fetched narrowly before
//! it is checked out, since a fresh clone may not contain it. The default
//! branch is looked up at checkout time rather than remembered from the clone.

use log::{debug, info};

use crate::error::Result;
use crate::reference::{GitReference, LibraryReference};
use crate::repository::{GitOperations, ORIGIN};

/// What a resolved reference should be checked out to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutTarget {
    /// An explicit branch or commit from the descriptor.
    Revision(String),
    /// Whatever the remote currently reports as its default branch.
    DefaultBranch,
}

impl CheckoutTarget {
    pub fn for_reference(reference: &GitReference) -> Self {
        match &reference.revision {
            Some(revision) => CheckoutTarget::Revision(revision.clone()),
            None => CheckoutTarget::DefaultBranch,
        }
    }
}

/// Check out a resolved reference to its declared target.
///
/// The caller must only pass references whose source directory exists; the
/// working tree is opened through the adapter before anything else happens.
pub fn checkout_reference(
    git_ops: &dyn GitOperations,
    library: &LibraryReference,
    git_reference: &GitReference,
    force: bool,
) -> Result<()> {
    let repo = git_ops.get_repo(&library.source_code_path)?;

    let revision = match CheckoutTarget::for_reference(git_reference) {
        CheckoutTarget::Revision(revision) => revision,
        CheckoutTarget::DefaultBranch => git_ops.get_default_branch(&repo)?,
    };

    // The default branch may have moved to a branch the clone never saw
    debug!("Fetching {} for {}", revision, library.name());
    git_ops.fetch(&repo, ORIGIN, &revision)?;

    info!(
        "Checking out {} at {}{}",
        library.name(),
        revision,
        if force { " (forced)" } else { "" }
    );
    git_ops.checkout(&repo, &revision, force)
}

/// Pin a freshly cloned reference to its revision, if it declares one.
///
/// References without a revision are left at the state the clone produced.
pub fn pin_after_clone(
    git_ops: &dyn GitOperations,
    library: &LibraryReference,
    git_reference: &GitReference,
) -> Result<()> {
    if git_reference.revision.is_none() {
        return Ok(());
    }
    checkout_reference(git_ops, library, git_reference, false)
}
