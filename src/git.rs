use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use crate::error::{Error, Result};

/// Run `git` with `args` inside `repo_dir`.
fn run_git(repo_dir: &Path, args: &[&str]) -> std::io::Result<Output> {
    Command::new("git").arg("-C").arg(repo_dir).args(args).output()
}

/// Clone a repository into `target_dir`, leaving it on the remote's default branch
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
/// - Any authentication configured in ~/.gitconfig
///
/// The target directory must not exist. It is only created by git itself, so a
/// failed clone leaves nothing behind that would later look resolved.
pub fn clone(url: &str, target_dir: &Path) -> Result<()> {
    let clone_error = |message: String| Error::Clone {
        url: url.to_string(),
        destination: target_dir.to_path_buf(),
        message,
    };

    if target_dir.exists() {
        return Err(clone_error("destination already exists".to_string()));
    }

    // Create parent directory if it doesn't exist
    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    // Execute git clone <url> <target_dir>
    let output = Command::new("git")
        .args(["clone", url])
        .arg(target_dir)
        .output()
        .map_err(|e| clone_error(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Provide helpful error message for common auth failures
        let message = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            format!(
                "Authentication failed. Make sure you have access to the repository.\n\
                For private repos, ensure you have:\n\
                - SSH key added to ssh-agent\n\
                - Git credentials configured\n\
                - Personal access token set up\n\
                Error: {}",
                stderr
            )
        } else {
            stderr.to_string()
        };

        return Err(clone_error(message));
    }

    Ok(())
}

/// Verify that `repo_dir` is the root of a git working tree
///
/// A plain directory nested inside some other repository is rejected, so
/// later commands never act on the enclosing project.
pub fn open(repo_dir: &Path) -> Result<()> {
    let command = "rev-parse --show-toplevel";
    let output =
        run_git(repo_dir, &["rev-parse", "--show-toplevel"]).map_err(|e| Error::GitCommand {
            command: command.to_string(),
            path: repo_dir.to_path_buf(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: command.to_string(),
            path: repo_dir.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    let toplevel = String::from_utf8_lossy(&output.stdout);
    if fs::canonicalize(toplevel.trim())? != fs::canonicalize(repo_dir)? {
        return Err(Error::GitCommand {
            command: command.to_string(),
            path: repo_dir.to_path_buf(),
            stderr: format!("not the root of a git working tree (found {})", toplevel.trim()),
        });
    }

    Ok(())
}

/// Fetch a single revision from `remote`, without the rest of its history
pub fn fetch(repo_dir: &Path, remote: &str, revision: &str) -> Result<()> {
    let command = format!("fetch {} {}", remote, revision);
    let output =
        run_git(repo_dir, &["fetch", remote, revision]).map_err(|e| Error::GitCommand {
            command: command.clone(),
            path: repo_dir.to_path_buf(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command,
            path: repo_dir.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(())
}

/// Whether `revision` names a commit already present in `repo_dir`
///
/// Abbreviated hashes resolve here even though remotes refuse to serve them
/// by name.
pub fn has_commit(repo_dir: &Path, revision: &str) -> bool {
    let object = format!("{}^{{commit}}", revision);
    run_git(repo_dir, &["rev-parse", "--verify", "--quiet", &object])
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Check out `revision` in `repo_dir`, discarding local changes if `force` is set
pub fn checkout(repo_dir: &Path, revision: &str, force: bool) -> Result<()> {
    let mut args = vec!["checkout"];
    if force {
        args.push("--force");
    }
    args.push(revision);

    let checkout_error = |message: String| Error::Checkout {
        path: repo_dir.to_path_buf(),
        revision: revision.to_string(),
        message,
    };

    let output = run_git(repo_dir, &args).map_err(|e| checkout_error(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(checkout_error(stderr.trim().to_string()));
    }

    Ok(())
}

/// Query the default branch of `remote` as seen from `repo_dir`
///
/// This asks the remote directly instead of reading the local
/// `refs/remotes/<remote>/HEAD`, which is only recorded at clone time.
pub fn default_branch(repo_dir: &Path, remote: &str) -> Result<String> {
    let command = format!("ls-remote --symref {} HEAD", remote);
    let output = run_git(repo_dir, &["ls-remote", "--symref", remote, "HEAD"]).map_err(
        |e| Error::GitCommand {
            command: command.clone(),
            path: repo_dir.to_path_buf(),
            stderr: e.to_string(),
        },
    )?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command,
            path: repo_dir.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_symref_head(&stdout).ok_or_else(|| Error::GitCommand {
        command,
        path: repo_dir.to_path_buf(),
        stderr: "remote did not report a default branch".to_string(),
    })
}

/// Extract the branch name from `git ls-remote --symref <remote> HEAD` output
fn parse_symref_head(output: &str) -> Option<String> {
    // Format: "ref: refs/heads/<branch>\tHEAD"
    output.lines().find_map(|line| {
        let (target, name) = line.strip_prefix("ref: ")?.split_once('\t')?;
        if name.trim() != "HEAD" {
            return None;
        }
        target.strip_prefix("refs/heads/").map(str::to_string)
    })
}
