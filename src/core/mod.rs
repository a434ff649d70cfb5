//! Core building blocks shared by every command
//!
//! - **config**: relnote.toml parsing and validation
//! - **error**: Error types with contextual help messages
//! - **vcs**: Git operations (SystemGit)

pub mod config;
pub mod error;
pub mod vcs;
