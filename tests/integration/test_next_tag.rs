//! Tests for the `next-tag` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_next_tag_bumps_patch() -> Result<()> {
  let temp = tempfile::TempDir::new()?;

  let output = run_relnote(temp.path(), &["next-tag", "--tag", "v1.2.3.4", "--run-number", "57"])?;
  assert_eq!(stdout(&output).trim(), "v1.2.4.57");

  let output = run_relnote(temp.path(), &["next-tag", "--tag", "v0.9.0", "--run-number", "1"])?;
  assert_eq!(stdout(&output).trim(), "v0.9.1.1");

  Ok(())
}

#[test]
fn test_next_tag_rejects_bad_tag() -> Result<()> {
  let temp = tempfile::TempDir::new()?;

  let output = run_relnote_raw(temp.path(), &["next-tag", "--tag", "release-7", "--run-number", "2"])?;
  assert!(!output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("release-7"));

  Ok(())
}
