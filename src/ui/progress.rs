//! Progress indicators for release asset transfers
//!
//! Uses `linya`, which draws to stderr and stays out of the way of Markdown on
//! stdout. In CI logs each redraw becomes a line, which is fine for a handful
//! of assets.

use linya::{Bar, Progress};

/// Progress bar for downloading and uploading release assets
pub struct AssetProgress {
  progress: Progress,
  bar: Bar,
}

impl AssetProgress {
  /// Create a new progress bar over `total` assets
  pub fn new(total: usize, label: impl Into<String>) -> Self {
    let mut progress = Progress::new();
    let bar = progress.bar(total, label.into());
    Self { progress, bar }
  }

  /// Mark one asset as done
  pub fn inc(&mut self) {
    self.progress.inc_and_draw(&self.bar, 1);
  }
}
