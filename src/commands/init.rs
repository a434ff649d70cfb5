//! `relnote init`: write a default relnote.toml

use crate::core::config::NotesConfig;
use crate::core::error::{ConfigError, NoteError, NoteResult};
use std::env;

/// Write the default configuration to ./relnote.toml
pub fn run_init(force: bool) -> NoteResult<()> {
  let workspace_root = env::current_dir()?;

  if let Some(existing) = NotesConfig::find_config_path(&workspace_root)
    && !force
  {
    return Err(NoteError::Config(ConfigError::AlreadyExists { path: existing }));
  }

  let path = NotesConfig::default().save(&workspace_root)?;
  println!("✅ Wrote {}", path.display());
  Ok(())
}
