//! Batch progress display for multi-image runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many images of a batch have been written
///
/// Single images are not worth a bar, so nothing is drawn unless the batch
/// holds more than one image.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: u64,
}

impl ProgressManager {
    /// Create a progress display for `image_count` images
    pub fn new(image_count: u64) -> Self {
        let bar = (image_count > 1).then(|| {
            let bar = ProgressBar::new(image_count);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });
        Self { bar, completed: 0 }
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Number of images marked complete
    pub const fn completed(&self) -> u64 {
        self.completed
    }

    /// Mark one image as written, showing its file name
    pub fn complete_image(&mut self, file_name: &str) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.set_message(file_name.to_string());
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All images written");
        }
    }
}
