//! Markdown renderers for the release body
//!
//! - **diff**: word-level `git diff` output to collapsible, column-aligned Markdown
//! - **width**: display-width heuristic and padding used by the diff renderer
//! - **commits**: commit log to Markdown headings
//!
//! Renderers are pure text transforms: no I/O, no shared state.

pub mod commits;
pub mod diff;
pub mod width;

pub use commits::{CommitLogOptions, render_commit_log};
pub use diff::{DiffOptions, render_diff_markdown};
