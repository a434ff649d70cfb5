//! Tests for the `init` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_init_creates_config() -> Result<()> {
  let repo = TestRepo::new()?;

  run_relnote(&repo.path, &["init"])?;

  assert!(repo.file_exists("relnote.toml"));
  let config = repo.read_file("relnote.toml")?;
  assert!(config.contains("[body]"));
  assert!(config.contains("max_length = 125000"));
  assert!(config.contains("[diff]"));

  Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file(".github/relnote.toml", "[diff]\nindent_width = 4\n")?;

  let output = run_relnote_raw(&repo.path, &["init"])?;
  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));

  run_relnote(&repo.path, &["init", "--force"])?;
  assert!(repo.file_exists("relnote.toml"));

  Ok(())
}

#[test]
fn test_init_output_is_loadable() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file("a.txt", "x\n")?;
  repo.commit("Add a")?;

  run_relnote(&repo.path, &["init"])?;
  run_relnote(&repo.path, &["body", "--since", "HEAD~1"])?;

  Ok(())
}
