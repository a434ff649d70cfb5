//! Release tag parsing and the next-version policy
//!
//! Tags carry four numbers, `v<major>.<minor>.<patch>.<build>`. Every CI run
//! bumps the patch of the latest tag and stamps the run number as build.

use crate::core::error::{GitHubError, NoteError, NoteResult};
use semver::Version;
use std::fmt;

/// A `v1.2.3.4` release tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
  /// major.minor.patch
  pub version: Version,
  /// CI run number the release was built from
  pub build: u64,
}

impl ReleaseTag {
  /// Parse a tag name
  ///
  /// Accepts `v1.2.3.4` and, for repositories tagged before builds were
  /// stamped, `v1.2.3` (build 0).
  pub fn parse(tag_name: &str) -> Option<Self> {
    let rest = tag_name.strip_prefix('v')?;
    let parts: Vec<&str> = rest.split('.').collect();

    let (triple, build) = match parts.as_slice() {
      [major, minor, patch] => (format!("{}.{}.{}", major, minor, patch), 0),
      [major, minor, patch, build] => (format!("{}.{}.{}", major, minor, patch), build.parse().ok()?),
      _ => return None,
    };

    let version = Version::parse(&triple).ok()?;
    Some(Self { version, build })
  }

  /// Parse a tag name or fail with a GitHub tag error
  pub fn parse_or_err(tag_name: &str) -> NoteResult<Self> {
    Self::parse(tag_name).ok_or_else(|| {
      NoteError::GitHub(GitHubError::InvalidTag {
        tag: tag_name.to_string(),
      })
    })
  }

  /// The tag for the next release: patch + 1, build = run number
  pub fn next(&self, run_number: u64) -> Self {
    Self {
      version: Version::new(self.version.major, self.version.minor, self.version.patch + 1),
      build: run_number,
    }
  }
}

impl fmt::Display for ReleaseTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "v{}.{}.{}.{}",
      self.version.major, self.version.minor, self.version.patch, self.build
    )
  }
}

/// The latest published tag and where the next release starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagResolution {
  /// Tag name to create
  pub next: ReleaseTag,
  /// Name of the latest existing tag
  pub previous: String,
  /// Commit the latest tag points at (diff/log base)
  pub base_sha: String,
}

impl TagResolution {
  /// Build the resolution from the latest tag name and commit
  pub fn from_latest(tag_name: &str, base_sha: &str, run_number: u64) -> NoteResult<Self> {
    let latest = ReleaseTag::parse_or_err(tag_name)?;
    Ok(Self {
      next: latest.next(run_number),
      previous: tag_name.to_string(),
      base_sha: base_sha.to_string(),
    })
  }
}
