//! Thin wrapper around the `git` executable. Output is passed through to the
//! terminal; only exit statuses are interpreted.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fmt;
use std::path::Path;
use std::process::Command;

/// A git command that ran but exited unsuccessfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailed {
    /// The command line, e.g. `git push`.
    pub command: String,
    /// The exit code, if the process exited normally.
    pub code: Option<i32>,
}

impl fmt::Display for CommandFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "`{}` exited with status {code}", self.command),
            None => write!(f, "`{}` was terminated by a signal", self.command),
        }
    }
}

impl std::error::Error for CommandFailed {}

fn command_line(args: &[&str]) -> String {
    std::iter::once("git")
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `git <args>` in `repo_dir`.
///
/// # Errors
///
/// Returns an error if git can't be spawned, or a [`CommandFailed`] if it
/// exits with a non-zero status.
pub fn run(repo_dir: &Path, args: &[&str]) -> Result<()> {
    let command = command_line(args);
    debug!("Running {command} in {}", repo_dir.display());

    let status = Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .status()
        .with_context(|| format!("Failed to execute {command}"))?;

    if !status.success() {
        return Err(CommandFailed {
            command,
            code: status.code(),
        }
        .into());
    }

    Ok(())
}

/// Returns whether the index of the repository at `repo_dir` differs from
/// `HEAD`.
///
/// # Errors
///
/// Returns an error if git can't be spawned or fails with a status other than
/// 0 (no changes) or 1 (changes).
pub fn has_staged_changes(repo_dir: &Path) -> Result<bool> {
    let args = ["diff", "--cached", "--quiet"];
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .context("Failed to execute git diff")?;

    match output.status.code() {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        code => Err(CommandFailed {
            command: command_line(&args),
            code,
        }
        .into()),
    }
}

/// Stages `pathspec`, then commits, rebases onto the remote and pushes if
/// anything was staged.
///
/// # Returns
///
/// Returns `true` if a commit was pushed, `false` if there was nothing to
/// commit.
///
/// # Errors
///
/// Returns an error as soon as one of the git commands fails.
pub fn commit_and_push(repo_dir: &Path, pathspec: &Path, message: &str) -> Result<bool> {
    let pathspec = pathspec.to_string_lossy();
    run(repo_dir, &["add", &*pathspec])?;

    if !has_staged_changes(repo_dir)? {
        info!("No changes to commit (already up to date)");
        return Ok(false);
    }

    run(repo_dir, &["commit", "-m", message])?;
    run(repo_dir, &["pull", "--rebase"])?;
    run(repo_dir, &["push"])?;

    info!("Pushed to remote");
    Ok(true)
}

/// Maps an error to the process exit status: the exit code of a failed git
/// command when there is one, 1 otherwise.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CommandFailed>())
        .and_then(|failed| failed.code)
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .unwrap_or(1)
}
