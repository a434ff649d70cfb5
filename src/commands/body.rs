//! `relnote body`: build the release body from the local repository
//!
//! Also hosts the body-building steps shared with `publish`.

use crate::core::config::NotesConfig;
use crate::core::error::{NoteResult, ResultExt};
use crate::core::vcs::SystemGit;
use crate::release::{BodyParts, ReleaseBody};
use crate::render::{render_commit_log, render_diff_markdown};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::{env, fs};

/// A release body together with what went into it
#[derive(Debug, Clone)]
pub struct BuiltBody {
  pub body: ReleaseBody,
  pub commit_count: usize,
  pub changed_files: usize,
}

#[derive(Serialize)]
struct BodySummary<'a> {
  since: &'a str,
  to: &'a str,
  commits: usize,
  changed_files: usize,
  full_length: usize,
  published_length: usize,
  truncated: bool,
  output: &'a Path,
}

/// Read the changelog; a missing file yields an empty section
pub fn read_changelog(root: &Path, changelog: &Path) -> NoteResult<String> {
  let path = root.join(changelog);
  if !path.exists() {
    eprintln!("⚠️  {} not found, changelog section left empty", path.display());
    return Ok(String::new());
  }
  fs::read_to_string(&path).with_context(|| format!("Failed to read changelog {}", path.display()))
}

/// Render commits, diff and changelog between `since` and `to` into a body
pub fn build_body(git: &SystemGit, config: &NotesConfig, since: &str, to: &str) -> NoteResult<BuiltBody> {
  let commits = git.commits_since(since, to)?;
  let raw_diff = git.word_diff(since, to)?;
  let changelog = read_changelog(git.work_tree(), &config.body.changelog)?;

  let commits_md = render_commit_log(&commits, &config.commit_options());
  let diff_md = render_diff_markdown(&raw_diff, &config.diff_options());

  let body = ReleaseBody::assemble(
    &BodyParts {
      commits: &commits_md,
      changelog: &changelog,
      diff: &diff_md,
    },
    config.body.max_length,
  );

  Ok(BuiltBody {
    body,
    commit_count: commits.len(),
    changed_files: raw_diff.lines().filter(|l| l.starts_with("diff --git")).count(),
  })
}

/// Write the untruncated body, returning where it went
pub fn write_full_body(path: &Path, body: &ReleaseBody) -> NoteResult<PathBuf> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(path, &body.full).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path.to_path_buf())
}

/// Run the body command
pub fn run_body(since: String, to: String, output: Option<PathBuf>, json: bool) -> NoteResult<()> {
  let workspace_root = env::current_dir()?;
  let config = NotesConfig::load(&workspace_root)?;
  let git = SystemGit::open(&workspace_root)?;

  let built = build_body(&git, &config, &since, &to)?;
  let output = output.unwrap_or_else(|| git.work_tree().join(&config.body.output));
  let written = write_full_body(&output, &built.body)?;

  if json {
    let summary = BodySummary {
      since: &since,
      to: &to,
      commits: built.commit_count,
      changed_files: built.changed_files,
      full_length: built.body.full.chars().count(),
      published_length: built.body.published.chars().count(),
      truncated: built.body.truncated,
      output: &written,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    return Ok(());
  }

  println!("📝 Release body for {}..{}", since, to);
  println!("   Commits:       {}", built.commit_count);
  println!("   Changed files: {}", built.changed_files);
  println!("   Length:        {} characters", built.body.full.chars().count());
  if built.body.truncated {
    println!(
      "   ⚠️  Over the {} character limit, published body will be truncated",
      config.body.max_length
    );
  }
  println!("✅ Wrote {}", written.display());

  Ok(())
}
