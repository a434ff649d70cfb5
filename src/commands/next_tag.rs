//! `relnote next-tag`: apply the version policy to a tag name

use crate::core::error::NoteResult;
use crate::release::ReleaseTag;

/// Print the tag that follows `tag` for CI run `run_number`
pub fn run_next_tag(tag: &str, run_number: u64) -> NoteResult<()> {
  let current = ReleaseTag::parse_or_err(tag)?;
  println!("{}", current.next(run_number));
  Ok(())
}
