//! Tests for the `body` command

use crate::helpers::*;
use anyhow::Result;

fn repo_with_release() -> Result<TestRepo> {
  let repo = TestRepo::new()?;
  repo.write_file("CHANGELOG.md", "# Changelog\n\n- Faster widgets\n")?;
  repo.write_file("notes.txt", "alpha beta gamma\n")?;
  repo.commit("Add notes")?;
  git(&repo.path, &["tag", "v0.1.0.1"])?;

  repo.write_file("notes.txt", "alpha delta gamma\n")?;
  repo.commit("Swap beta for delta\n\nKeeps the list alphabetical.")?;
  Ok(repo)
}

#[test]
fn test_body_writes_all_sections() -> Result<()> {
  let repo = repo_with_release()?;

  run_relnote(&repo.path, &["body", "--since", "v0.1.0.1"])?;

  assert!(repo.file_exists("release_body.md"));
  let body = repo.read_file("release_body.md")?;

  assert!(body.starts_with("## *Commits*:\n\n### Swap beta for delta\n"));
  assert!(body.contains("by [Test User](mailto:test@example.com)"));
  assert!(body.contains("Keeps the list alphabetical."));
  assert!(body.contains("- Faster widgets"));
  assert!(body.contains("## *Git Diff*:"));
  assert!(body.contains("### notes.txt"));
  assert!(body.ends_with("</details>\n"));
  assert!(!body.contains("Add notes"));

  Ok(())
}

#[test]
fn test_body_json_summary() -> Result<()> {
  let repo = repo_with_release()?;

  let output = run_relnote(&repo.path, &["body", "--since", "HEAD~1", "--output", "out/body.md", "--json"])?;
  let summary: serde_json::Value = serde_json::from_str(&stdout(&output))?;

  assert_eq!(summary["commits"], 1);
  assert_eq!(summary["changed_files"], 1);
  assert_eq!(summary["truncated"], false);
  assert!(repo.file_exists("out/body.md"));

  Ok(())
}

#[test]
fn test_body_truncates_to_configured_limit() -> Result<()> {
  let repo = repo_with_release()?;
  repo.write_file("relnote.toml", "[body]\nmax_length = 100\n")?;

  let output = run_relnote(&repo.path, &["body", "--since", "v0.1.0.1", "--json"])?;
  let summary: serde_json::Value = serde_json::from_str(&stdout(&output))?;

  assert_eq!(summary["truncated"], true);
  assert_eq!(summary["published_length"], 80 + "\n\n(More)... ...".len());

  // the file keeps the full body
  let body = repo.read_file("release_body.md")?;
  assert!(body.chars().count() > 100);

  Ok(())
}

#[test]
fn test_body_without_changelog() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file("a.txt", "one\n")?;
  repo.commit("Add a")?;

  let output = run_relnote_raw(&repo.path, &["body", "--since", "HEAD~1"])?;
  assert!(output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("CHANGELOG.md not found"));

  let body = repo.read_file("release_body.md")?;
  assert!(body.contains("\n\n---\n\n\n\n---\n\n"));

  Ok(())
}

#[test]
fn test_body_with_latin1_file() -> Result<()> {
  let repo = TestRepo::new()?;
  // "café olé" in Latin-1
  repo.write_file("legacy.txt", b"caf\xe9 ol\xe9\n")?;
  repo.commit("Add legacy file")?;
  repo.write_file("legacy.txt", b"caf\xe9 bien\n")?;
  repo.commit("Edit legacy file")?;

  run_relnote(&repo.path, &["body", "--since", "HEAD~1"])?;

  let body = repo.read_file("release_body.md")?;
  assert!(body.contains("### legacy.txt"));
  assert!(body.contains("\u{FFFD}"));
  assert!(body.contains("bien"));

  Ok(())
}

#[test]
fn test_body_unknown_revision() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_relnote_raw(&repo.path, &["body", "--since", "v9.9.9.9"])?;
  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(2));
  assert!(!repo.file_exists("release_body.md"));

  Ok(())
}
