//! CLI commands for relnote
//!
//! ## Setup
//! - **init**: Write a default relnote.toml
//!
//! ## Rendering
//! - **diff**: Render a porcelain word diff to Markdown
//! - **body**: Build the full release body for a revision range
//!
//! ## Releases
//! - **next-tag**: Compute the tag that follows a given tag
//! - **publish**: Create the GitHub release for a CI run

pub mod body;
pub mod diff;
pub mod init;
pub mod next_tag;
pub mod publish;

pub use body::run_body;
pub use diff::run_diff;
pub use init::run_init;
pub use next_tag::run_next_tag;
pub use publish::{PublishOptions, run_publish};
