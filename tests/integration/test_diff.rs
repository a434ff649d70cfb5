//! Tests for the `diff` command

use crate::helpers::*;
use anyhow::Result;

const WORD_DIFF: &str = "diff --git a/src/app.txt b/src/app.txt
index 3b18e51..a9c2f10 100644
--- a/src/app.txt
+++ b/src/app.txt
@@ -1,2 +1,2 @@
 untouched
~
 let x =
-1
+2
 ;
~
";

#[test]
fn test_diff_from_stdin() -> Result<()> {
  let temp = tempfile::TempDir::new()?;

  let output = run_relnote_with_stdin(temp.path(), &["diff"], WORD_DIFF)?;
  let md = stdout(&output);

  assert!(md.starts_with("\n### src/app.txt\n\n```bash\ndiff --git a/src/app.txt b/src/app.txt\n```\n\n```diff\n"));
  assert!(md.contains("* untouched\n"));
  assert!(md.contains("@@ -1,2 +1,2 @@\n"));
  assert!(md.contains("- 1"));
  assert!(md.contains("+ 2"));
  assert!(md.trim_end().ends_with("```"));
  assert_eq!(md.matches("```").count() % 2, 0);

  Ok(())
}

#[test]
fn test_diff_file_to_file() -> Result<()> {
  let temp = tempfile::TempDir::new()?;
  std::fs::write(temp.path().join("changes.diff"), WORD_DIFF)?;

  let piped = run_relnote_with_stdin(temp.path(), &["diff"], WORD_DIFF)?;
  run_relnote(
    temp.path(),
    &["diff", "--input", "changes.diff", "--output", "changes.md"],
  )?;

  let written = std::fs::read_to_string(temp.path().join("changes.md"))?;
  assert_eq!(written, stdout(&piped));

  Ok(())
}

#[test]
fn test_diff_of_real_repository() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file("notes.txt", "alpha beta gamma\n")?;
  repo.commit("Add notes")?;
  repo.write_file("notes.txt", "alpha delta gamma\n")?;
  repo.commit("Edit notes")?;

  let raw = git(&repo.path, &["diff", "--word-diff=porcelain", "HEAD~1", "HEAD"])?;
  let output = run_relnote_with_stdin(&repo.path, &["diff"], &raw.stdout)?;
  let md = stdout(&output);

  assert!(md.contains("### notes.txt"));
  assert!(md.contains("- beta"));
  assert!(md.contains("+ delta"));
  assert_eq!(md.matches("```").count() % 2, 0);

  Ok(())
}

#[test]
fn test_diff_non_utf8_input_still_renders() -> Result<()> {
  let temp = tempfile::TempDir::new()?;
  let mut input = b"diff --git a/legacy.txt b/legacy.txt\n@@ -1 +1 @@\n-caf".to_vec();
  input.push(0xE9);
  input.extend_from_slice(b"\n+cafe\n~\n");

  let output = run_relnote_with_stdin(temp.path(), &["diff"], &input)?;
  let md = stdout(&output);

  assert!(md.contains("### legacy.txt"));
  assert!(md.contains("- caf\u{FFFD}"));
  assert!(md.contains("+ cafe"));

  Ok(())
}

#[test]
fn test_diff_empty_input() -> Result<()> {
  let temp = tempfile::TempDir::new()?;
  let output = run_relnote_with_stdin(temp.path(), &["diff"], "")?;
  assert_eq!(stdout(&output).trim(), "");
  Ok(())
}

#[test]
fn test_diff_missing_input_file() -> Result<()> {
  let temp = tempfile::TempDir::new()?;
  let output = run_relnote_raw(temp.path(), &["diff", "--input", "nope.diff"])?;
  assert!(!output.status.success());
  Ok(())
}
