//! Release body assembly and size limiting

use crate::core::config::TRUNCATION_RESERVE;

/// Appended to a body that had to be cut
pub const TRUNCATION_MARKER: &str = "\n\n(More)... ...";

/// Rendered pieces of a release body
#[derive(Debug, Clone, Default)]
pub struct BodyParts<'a> {
  /// Commit log Markdown
  pub commits: &'a str,
  /// Changelog file contents, verbatim
  pub changelog: &'a str,
  /// Diff Markdown
  pub diff: &'a str,
}

/// The body as published plus the untruncated original
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseBody {
  /// Body sent to GitHub
  pub published: String,
  /// Full body, kept as an asset
  pub full: String,
  pub truncated: bool,
}

impl ReleaseBody {
  /// Concatenate the parts and enforce `max_length` (in characters)
  pub fn assemble(parts: &BodyParts<'_>, max_length: usize) -> Self {
    let mut full = String::from("## *Commits*:\n\n");
    full.push_str(parts.commits);
    full.push_str("\n\n---\n\n");
    full.push_str(parts.changelog);
    full.push_str("\n\n---\n\n## *Git Diff*:\n\n");
    full.push_str("<details><summary>Changes are listed as follows:</summary>\n");
    full.push_str(parts.diff);
    full.push_str("</details>\n");

    Self::limit(full, max_length)
  }

  /// Truncate `full` to fit `max_length`, keeping the original
  pub fn limit(full: String, max_length: usize) -> Self {
    if full.chars().count() <= max_length {
      return Self {
        published: full.clone(),
        full,
        truncated: false,
      };
    }

    let keep = max_length.saturating_sub(TRUNCATION_RESERVE);
    let mut published: String = full.chars().take(keep).collect();
    published.push_str(TRUNCATION_MARKER);

    Self {
      published,
      full,
      truncated: true,
    }
  }
}
