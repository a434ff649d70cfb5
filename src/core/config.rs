use crate::core::error::{ConfigError, NoteError, NoteResult, ResultExt};
use crate::render::{CommitLogOptions, DiffOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default GitHub release body limit (characters)
pub const DEFAULT_MAX_BODY_LENGTH: usize = 125_000;

/// Characters reserved for the truncation marker
pub const TRUNCATION_RESERVE: usize = 20;

/// Widest column step accepted for `diff.indent_width`
pub const MAX_INDENT_WIDTH: u32 = 1024;

/// Largest `commits.utc_offset_minutes` magnitude (just under a day)
const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Configuration for relnote
/// Searched in order: relnote.toml, .relnote.toml, .github/relnote.toml
///
/// Every section is optional; a repository without a config file gets the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NotesConfig {
  #[serde(default)]
  pub body: BodyConfig,
  #[serde(default)]
  pub commits: CommitsConfig,
  #[serde(default)]
  pub diff: DiffConfig,
  #[serde(default)]
  pub github: GitHubConfig,
}

/// Release body assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
  /// Changelog appended verbatim to the body (relative to the repository root)
  #[serde(default = "default_changelog")]
  pub changelog: PathBuf,

  /// Longest body GitHub accepts; longer bodies are truncated
  #[serde(default = "default_max_length")]
  pub max_length: usize,

  /// Where the untruncated body is written (and the asset name it is uploaded as)
  #[serde(default = "default_output")]
  pub output: PathBuf,
}

fn default_changelog() -> PathBuf {
  PathBuf::from("CHANGELOG.md")
}

fn default_max_length() -> usize {
  DEFAULT_MAX_BODY_LENGTH
}

fn default_output() -> PathBuf {
  PathBuf::from("release_body.md")
}

impl Default for BodyConfig {
  fn default() -> Self {
    Self {
      changelog: default_changelog(),
      max_length: default_max_length(),
      output: default_output(),
    }
  }
}

/// Commit log rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitsConfig {
  /// Commits shown before the rest are folded into <details>
  #[serde(default = "default_collapse_after")]
  pub collapse_after: usize,

  /// Offset for displayed dates, minutes east of UTC
  #[serde(default = "default_utc_offset_minutes")]
  pub utc_offset_minutes: i32,

  /// Label appended to displayed dates
  #[serde(default = "default_zone_label")]
  pub zone_label: String,
}

fn default_collapse_after() -> usize {
  CommitLogOptions::default().collapse_after
}

fn default_utc_offset_minutes() -> i32 {
  CommitLogOptions::default().utc_offset_minutes
}

fn default_zone_label() -> String {
  CommitLogOptions::default().zone_label
}

impl Default for CommitsConfig {
  fn default() -> Self {
    Self {
      collapse_after: default_collapse_after(),
      utc_offset_minutes: default_utc_offset_minutes(),
      zone_label: default_zone_label(),
    }
  }
}

/// Diff rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffConfig {
  /// Column step that aligned groups are padded to
  #[serde(default = "default_indent_width")]
  pub indent_width: u32,
}

fn default_indent_width() -> u32 {
  DiffOptions::default().indent_width
}

impl Default for DiffConfig {
  fn default() -> Self {
    Self {
      indent_width: default_indent_width(),
    }
  }
}

/// GitHub publishing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubConfig {
  /// owner/repo; falls back to $GITHUB_REPOSITORY
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub repository: Option<String>,

  /// Scratch directory for downloaded workflow artifacts
  #[serde(default = "default_artifacts_dir")]
  pub artifacts_dir: PathBuf,
}

fn default_artifacts_dir() -> PathBuf {
  PathBuf::from(".relnote/artifacts")
}

impl Default for GitHubConfig {
  fn default() -> Self {
    Self {
      repository: None,
      artifacts_dir: default_artifacts_dir(),
    }
  }
}

fn invalid(field: &str, reason: impl Into<String>) -> NoteError {
  NoteError::Config(ConfigError::InvalidValue {
    field: field.to_string(),
    reason: reason.into(),
  })
}

/// Check an `owner/repo` slug
pub fn validate_repository(repo: &str) -> NoteResult<()> {
  match repo.split_once('/') {
    Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => Ok(()),
    _ => Err(invalid("github.repository", format!("'{}' is not in owner/repo form", repo))),
  }
}

impl NotesConfig {
  /// Find config file in search order: relnote.toml, .relnote.toml, .github/relnote.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = [
      path.join("relnote.toml"),
      path.join(".relnote.toml"),
      path.join(".github").join("relnote.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config, falling back to defaults when no file exists
  pub fn load(path: &Path) -> NoteResult<Self> {
    let Some(config_path) = Self::find_config_path(path) else {
      return Ok(Self::default());
    };

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: NotesConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    config
      .validate()
      .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;

    Ok(config)
  }

  /// Save config to relnote.toml (default location)
  pub fn save(&self, path: &Path) -> NoteResult<PathBuf> {
    let config_path = path.join("relnote.toml");
    let content = toml_edit::ser::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(&config_path, content).with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    Ok(config_path)
  }

  /// Validate value ranges
  pub fn validate(&self) -> NoteResult<()> {
    if self.body.max_length <= TRUNCATION_RESERVE {
      return Err(invalid(
        "body.max_length",
        format!("must be greater than {}", TRUNCATION_RESERVE),
      ));
    }

    if !(1..=MAX_INDENT_WIDTH).contains(&self.diff.indent_width) {
      return Err(invalid(
        "diff.indent_width",
        format!("must be between 1 and {}", MAX_INDENT_WIDTH),
      ));
    }

    if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&self.commits.utc_offset_minutes) {
      return Err(invalid("commits.utc_offset_minutes", "must be within ±24 hours"));
    }

    if let Some(repo) = &self.github.repository {
      validate_repository(repo)?;
    }

    Ok(())
  }

  /// Options for the diff renderer
  pub fn diff_options(&self) -> DiffOptions {
    DiffOptions {
      indent_width: self.diff.indent_width,
    }
  }

  /// Options for the commit log renderer
  pub fn commit_options(&self) -> CommitLogOptions {
    CommitLogOptions {
      collapse_after: self.commits.collapse_after,
      utc_offset_minutes: self.commits.utc_offset_minutes,
      zone_label: self.commits.zone_label.clone(),
    }
  }
}
