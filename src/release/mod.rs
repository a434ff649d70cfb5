//! Release publishing
//!
//! - **tag**: `v<major>.<minor>.<patch>.<build>` tags and the next-version policy
//! - **body**: release body assembly and truncation to GitHub's size limit
//! - **github**: tags, releases, artifacts and asset uploads through the gh CLI
//!
//! The full flow (see `commands::publish`):
//!
//! 1. Look up the latest tag and its commit
//! 2. Render commits and the word diff since that commit, append the changelog
//! 3. Write the untruncated body to `release_body.md`
//! 4. Create the release `v<M>.<m>.<p+1>.<run>` with the (possibly truncated) body
//! 5. Upload `release_body.md` and every workflow artifact as `<name>.zip`

pub mod body;
pub mod github;
pub mod tag;

pub use body::{BodyParts, ReleaseBody};
pub use github::{GitHub, NewRelease};
pub use tag::{ReleaseTag, TagResolution};
