//! Batch progress reporting

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const BAR_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";

/// Tracks reflowed and skipped files across worker threads.
///
/// A bar is drawn only for batches of two or more files and never in quiet
/// mode; the counters are kept either way.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    quiet: bool,
    skipped: AtomicUsize,
}

impl ProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            bar: None,
            quiet,
            skipped: AtomicUsize::new(0),
        }
    }

    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet || total_files < 2 {
            return;
        }

        let bar = ProgressBar::new(total_files);
        if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            bar.set_style(style.progress_chars("##-"));
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    pub fn file_completed(&self, filename: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("Reflowed: {filename}"));
            bar.inc(1);
        }
    }

    pub fn file_skipped(&self, filename: &str) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
        if let Some(bar) = &self.bar {
            bar.set_message(format!("Skipped: {filename}"));
            bar.inc(1);
        }
    }

    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            match self.skipped() {
                0 => bar.finish_with_message("Complete"),
                n => bar.finish_with_message(format!("Complete, {n} skipped")),
            }
        }
    }

    /// Returns true if a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }
}
