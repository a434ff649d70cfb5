//! Integration tests for relnote
//!
//! Each test builds a throwaway git repository and drives the compiled binary.

mod helpers;
mod test_body;
mod test_diff;
mod test_init;
mod test_next_tag;
