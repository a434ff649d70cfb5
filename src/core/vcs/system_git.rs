//! System git backend
//!
//! Every operation shells out to the `git` binary on PATH. Commands run with a
//! cleared environment and a few safe config overrides so a developer's global
//! git config cannot change the output we parse.

use crate::core::error::{GitError, NoteError, NoteResult, ResultExt};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Git backend using system git
pub struct SystemGit {
  /// Repository working directory
  pub(crate) repo_path: PathBuf,

  /// Working tree root
  pub(crate) work_tree: PathBuf,
}

impl SystemGit {
  /// Open a git repository
  pub fn open(path: &Path) -> NoteResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if stderr.contains("not a git repository") {
        return Err(NoteError::Git(GitError::RepoNotFound {
          path: path.to_path_buf(),
        }));
      }
      return Err(NoteError::message(format!("Failed to open git repository: {}", stderr)));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let work_tree = stdout.trim();

    Ok(Self {
      repo_path: path.to_path_buf(),
      work_tree: PathBuf::from(work_tree),
    })
  }

  /// Root of the working tree
  pub fn work_tree(&self) -> &Path {
    &self.work_tree
  }

  /// Get HEAD commit SHA
  pub fn head_commit(&self) -> NoteResult<String> {
    self.resolve("HEAD")
  }

  /// Resolve a revision (tag, branch, short sha) to a full commit SHA
  pub fn resolve(&self, rev: &str) -> NoteResult<String> {
    let output = self
      .git_cmd()
      .args(["rev-parse", "--verify", "--quiet"])
      .arg(format!("{}^{{commit}}", rev))
      .output()
      .context("Failed to run git rev-parse")?;

    if !output.status.success() {
      return Err(NoteError::Git(GitError::RevisionNotFound { rev: rev.to_string() }));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Run a git command and return its stdout, failing on a non-zero exit
  pub(crate) fn run(&self, args: &[&str]) -> NoteResult<Output> {
    let output = self
      .git_cmd()
      .args(args)
      .output()
      .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(NoteError::Git(GitError::CommandFailed {
        command: format!("git {}", args.join(" ")),
        stderr: stderr.to_string(),
      }));
    }

    Ok(output)
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Adds safe configuration overrides
  pub(crate) fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("protocol.version=2");
    cmd.arg("-c").arg("core.quotePath=false"); // keep non-ASCII paths readable in headings
    cmd.arg("-c").arg("color.ui=never");
    cmd.arg("-c").arg("diff.noprefix=false");

    cmd
  }
}
