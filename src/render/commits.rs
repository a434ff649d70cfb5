//! Commit log to Markdown
//!
//! Each commit becomes a `###` heading (its subject), a dated author line and
//! the rest of the message. Long logs keep the first few commits visible and
//! fold the remainder into a `<details>` block.

use crate::core::vcs::CommitInfo;
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// How commits are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitLogOptions {
  /// Number of commits shown before the rest are collapsed
  pub collapse_after: usize,
  /// Offset used to display commit dates, in minutes east of UTC
  pub utc_offset_minutes: i32,
  /// Appended to every displayed date, e.g. " (UTC+8)"
  pub zone_label: String,
}

impl Default for CommitLogOptions {
  fn default() -> Self {
    Self {
      collapse_after: 3,
      utc_offset_minutes: 8 * 60,
      zone_label: " (北京时间)".to_string(),
    }
  }
}

impl CommitLogOptions {
  fn offset(&self) -> FixedOffset {
    FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
  }

  /// Format a unix timestamp in the configured zone
  pub fn format_date(&self, timestamp: i64) -> String {
    let date = DateTime::from_timestamp(timestamp, 0)
      .unwrap_or_default()
      .with_timezone(&self.offset());
    format!("{}{}", date.format("%Y-%m-%d %H:%M:%S"), self.zone_label)
  }
}

fn render_commit(commit: &CommitInfo, options: &CommitLogOptions) -> String {
  let mut lines = commit.message.trim_end().lines().map(str::trim);
  let subject = lines.next().unwrap_or_default();
  let body = lines.collect::<Vec<_>>().join("\n");

  format!(
    "### {}\n\n*{}* by [{}](mailto:{})\n\n{}\n\n",
    subject,
    options.format_date(commit.timestamp),
    commit.author,
    commit.author_email,
    body
  )
}

/// Render commits (newest first) as Markdown
pub fn render_commit_log(commits: &[CommitInfo], options: &CommitLogOptions) -> String {
  let mut out = String::new();

  for (i, commit) in commits.iter().enumerate() {
    if i == options.collapse_after {
      out.push_str("<details><summary>Expand all commits ... </summary>\n\n");
    }
    out.push_str(&render_commit(commit, options));
  }

  if commits.len() > options.collapse_after {
    out.push_str("</details>");
  }

  out
}
