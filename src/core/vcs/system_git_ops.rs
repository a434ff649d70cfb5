//! History and diff operations for SystemGit

use super::CommitInfo;
use super::system_git::SystemGit;
use crate::core::error::{NoteError, NoteResult};

/// Field and record separators for `git log --format`
const FIELD_SEP: char = '\x1f';
const RECORD_SEP: char = '\x1e';

impl SystemGit {
  /// Whether the clone is shallow (typical for CI checkouts)
  pub fn is_shallow(&self) -> NoteResult<bool> {
    let output = self.run(&["rev-parse", "--is-shallow-repository"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim() == "true")
  }

  /// Fetch the full history and tags
  ///
  /// `--unshallow` is only passed for shallow clones; git rejects it otherwise.
  pub fn fetch_full_history(&self) -> NoteResult<()> {
    if self.is_shallow()? {
      self.run(&["fetch", "--prune", "--unshallow", "--tags"])?;
    } else {
      self.run(&["fetch", "--prune", "--tags"])?;
    }
    Ok(())
  }

  /// Commits reachable from `to` but not from `since`, newest first
  pub fn commits_since(&self, since: &str, to: &str) -> NoteResult<Vec<CommitInfo>> {
    let format = format!("--format=%an{0}%ae{0}%at{0}%B{1}", FIELD_SEP, RECORD_SEP);
    let range = format!("{}..{}", since, to);
    let output = self.run(&["log", &format, &range])?;

    parse_log_output(&String::from_utf8_lossy(&output.stdout))
  }

  /// Word-level porcelain diff between two revisions
  ///
  /// Files in other encodings are decoded lossily rather than failing the run.
  pub fn word_diff(&self, from: &str, to: &str) -> NoteResult<String> {
    let output = self.run(&["diff", "--no-ext-diff", "--word-diff=porcelain", from, to])?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
  }
}

/// Parse `git log` output produced with FIELD_SEP/RECORD_SEP delimiters
fn parse_log_output(output: &str) -> NoteResult<Vec<CommitInfo>> {
  output
    .split(RECORD_SEP)
    .map(|record| record.trim_start_matches('\n'))
    .filter(|record| !record.trim().is_empty())
    .map(parse_commit_record)
    .collect()
}

fn parse_commit_record(record: &str) -> NoteResult<CommitInfo> {
  let mut fields = record.splitn(4, FIELD_SEP);

  let author = fields.next().ok_or_else(|| NoteError::message("Missing author name"))?.to_string();
  let author_email = fields.next().ok_or_else(|| NoteError::message("Missing author email"))?.to_string();
  let timestamp = fields
    .next()
    .and_then(|s| s.trim().parse::<i64>().ok())
    .ok_or_else(|| NoteError::message(format!("Missing/invalid author timestamp in commit by {}", author)))?;
  let message = fields.next().unwrap_or_default().trim().to_string();

  Ok(CommitInfo {
    author,
    author_email,
    message,
    timestamp,
  })
}
