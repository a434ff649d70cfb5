//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A scratch git repository
pub struct TestRepo {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestRepo {
  /// Create a repository with one initial commit
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    git(&path, &["init", "--initial-branch=main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;

    std::fs::write(path.join("README.md"), "# demo\n")?;
    git(&path, &["add", "."])?;
    git(&path, &["commit", "-m", "Initial commit"])?;

    Ok(Self { _root: root, path })
  }

  /// Write a file relative to the repository root
  pub fn write_file(&self, rel: &str, content: impl AsRef<[u8]>) -> Result<()> {
    let file_path = self.path.join(rel);
    if let Some(parent) = file_path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
  }

  /// Commit current changes
  pub fn commit(&self, message: &str) -> Result<String> {
    git(&self.path, &["add", "."])?;
    git(&self.path, &["commit", "-m", message])?;

    let output = git(&self.path, &["rev-parse", "HEAD"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Check if a file exists
  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  /// Read a file
  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

fn relnote(cwd: &Path, args: &[&str]) -> Command {
  let mut cmd = Command::new(env!("CARGO_BIN_EXE_relnote"));
  cmd.current_dir(cwd).args(args);
  cmd
}

/// Run relnote and return its output whatever the exit status
pub fn run_relnote_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  relnote(cwd, args).output().context("Failed to run relnote")
}

/// Run relnote, failing on a non-zero exit
pub fn run_relnote(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_relnote_raw(cwd, args)?;
  check_success(args, output)
}

/// Run relnote with `input` on stdin
pub fn run_relnote_with_stdin(cwd: &Path, args: &[&str], input: impl AsRef<[u8]>) -> Result<Output> {
  let mut child = relnote(cwd, args)
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .context("Failed to spawn relnote")?;

  child
    .stdin
    .take()
    .context("relnote stdin not captured")?
    .write_all(input.as_ref())?;

  let output = child.wait_with_output()?;
  check_success(args, output)
}

fn check_success(args: &[&str], output: Output) -> Result<Output> {
  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "relnote command failed: relnote {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Stdout as a string
pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).to_string()
}
