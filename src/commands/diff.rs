//! `relnote diff`: render a porcelain word diff to Markdown

use crate::core::config::NotesConfig;
use crate::core::error::{NoteResult, ResultExt};
use crate::render::render_diff_markdown;
use std::io::{self, Read};
use std::path::PathBuf;
use std::{env, fs};

/// Render `input` (or stdin) and write to `output` (or stdout)
pub fn run_diff(input: Option<PathBuf>, output: Option<PathBuf>) -> NoteResult<()> {
  let config = NotesConfig::load(&env::current_dir()?)?;

  let raw = match &input {
    Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?,
    None => {
      let mut buf = Vec::new();
      io::stdin()
        .read_to_end(&mut buf)
        .context("Failed to read diff from stdin")?;
      buf
    }
  };

  // diffs of files in legacy encodings still render, with U+FFFD for bad bytes
  let markdown = render_diff_markdown(&String::from_utf8_lossy(&raw), &config.diff_options());

  match output {
    Some(path) => {
      fs::write(&path, &markdown).with_context(|| format!("Failed to write {}", path.display()))?;
      eprintln!("✅ Wrote {} ({} bytes)", path.display(), markdown.len());
    }
    None => print!("{}", markdown),
  }

  Ok(())
}
