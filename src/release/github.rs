//! GitHub releases via the gh CLI
//!
//! Authentication is whatever gh picks up (`GH_TOKEN`, `GITHUB_TOKEN` or a
//! logged-in session), so unlike git commands the environment is passed through.
//! Calls are made one at a time and never retried; a failure ends the run.

use crate::core::config::validate_repository;
use crate::core::error::{GitHubError, NoteError, NoteResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Latest tag as reported by the tags API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagEntry {
  pub name: String,
  pub commit: TagCommit,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagCommit {
  pub sha: String,
}

/// Payload for `POST repos/{repo}/releases`
#[derive(Debug, Clone, Serialize)]
pub struct NewRelease<'a> {
  pub tag_name: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub target_commitish: Option<&'a str>,
  pub name: &'a str,
  pub body: &'a str,
  pub draft: bool,
  pub prerelease: bool,
}

/// The release GitHub created
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedRelease {
  pub html_url: String,
}

/// A workflow run artifact
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artifact {
  pub id: u64,
  pub name: String,
  #[serde(default)]
  pub expired: bool,
}

#[derive(Debug, Deserialize)]
struct ArtifactList {
  artifacts: Vec<Artifact>,
}

/// Parse the tags API response, returning the first (latest) tag
pub fn parse_latest_tag(json: &[u8], repo: &str) -> NoteResult<TagEntry> {
  let tags: Vec<TagEntry> = serde_json::from_slice(json).context("Unexpected response from the tags API")?;
  tags.into_iter().next().ok_or_else(|| {
    NoteError::GitHub(GitHubError::NoTags {
      repo: repo.to_string(),
    })
  })
}

/// Parse the run artifacts API response, skipping expired artifacts
pub fn parse_artifacts(json: &[u8]) -> NoteResult<Vec<Artifact>> {
  let list: ArtifactList = serde_json::from_slice(json).context("Unexpected response from the artifacts API")?;
  Ok(list.artifacts.into_iter().filter(|a| !a.expired).collect())
}

/// GitHub client for one repository
pub struct GitHub {
  repo: String,
}

impl GitHub {
  /// Client for `owner/repo`
  pub fn new(repo: impl Into<String>) -> NoteResult<Self> {
    let repo = repo.into();
    validate_repository(&repo)?;
    Ok(Self { repo })
  }

  pub fn repo(&self) -> &str {
    &self.repo
  }

  /// Latest tag of the repository (the API lists newest first)
  pub fn latest_tag(&self) -> NoteResult<TagEntry> {
    let endpoint = format!("repos/{}/tags?per_page=1", self.repo);
    let out = self.run(&["api", &endpoint], None)?;
    parse_latest_tag(&out, &self.repo)
  }

  /// Create a published (non-draft) release
  pub fn create_release(&self, release: &NewRelease<'_>) -> NoteResult<CreatedRelease> {
    let endpoint = format!("repos/{}/releases", self.repo);
    let payload = serde_json::to_vec(release)?;
    let out = self.run(&["api", "-X", "POST", &endpoint, "--input", "-"], Some(&payload))?;
    serde_json::from_slice(&out).context("Unexpected response from the releases API")
  }

  /// Artifacts uploaded by a workflow run
  pub fn list_run_artifacts(&self, run_id: u64) -> NoteResult<Vec<Artifact>> {
    let endpoint = format!("repos/{}/actions/runs/{}/artifacts?per_page=100", self.repo, run_id);
    let out = self.run(&["api", &endpoint], None)?;
    parse_artifacts(&out)
  }

  /// Download an artifact's zip archive into `dir` as `<name>.zip`
  pub fn download_artifact(&self, artifact: &Artifact, dir: &Path) -> NoteResult<PathBuf> {
    let endpoint = format!("repos/{}/actions/artifacts/{}/zip", self.repo, artifact.id);
    let data = self.run(&["api", &endpoint], None)?;

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(format!("{}.zip", artifact.name));
    fs::write(&path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
  }

  /// Attach a file to the release for `tag`; the asset takes the file's name
  pub fn upload_asset(&self, tag: &str, path: &Path) -> NoteResult<()> {
    let file = path.to_string_lossy();
    self.run(&["release", "upload", tag, &file, "--clobber", "--repo", &self.repo], None)?;
    Ok(())
  }

  fn run(&self, args: &[&str], stdin: Option<&[u8]>) -> NoteResult<Vec<u8>> {
    let mut cmd = Command::new("gh");
    cmd
      .args(args)
      .env("GH_PROMPT_DISABLED", "1")
      .env("NO_COLOR", "1")
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() });

    let mut child = match cmd.spawn() {
      Ok(child) => child,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(NoteError::GitHub(GitHubError::CliMissing)),
      Err(e) => return Err(NoteError::from(e).context("Failed to run gh")),
    };

    if let (Some(input), Some(mut pipe)) = (stdin, child.stdin.take()) {
      pipe.write_all(input).context("Failed to write request body to gh")?;
    }

    let output = child.wait_with_output().context("Failed to wait for gh")?;

    if !output.status.success() {
      return Err(NoteError::GitHub(GitHubError::CommandFailed {
        command: format!("gh {}", args.join(" ")),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
      }));
    }

    Ok(output.stdout)
  }
}
