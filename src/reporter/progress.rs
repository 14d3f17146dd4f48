//! Extraction progress on stderr.
//!
//! The bar counts decoded packages and keeps a running tally of the ones the
//! decoder rejected, since those are dropped from the snapshot.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Smaller runs finish before a bar is worth drawing.
const MIN_PACKAGES_FOR_PROGRESS: usize = 10;

const TEMPLATE: &str = "Extracting {bar:40} {pos:>4}/{len:4} packages {msg}";

pub struct ExtractProgress {
    bar: Option<ProgressBar>,
    failed: AtomicUsize,
}

impl ExtractProgress {
    /// Draws only for interactive, non-CI runs of at least ten packages.
    pub fn new(total_packages: usize, is_tty: bool, is_ci: bool) -> Self {
        let visible = total_packages >= MIN_PACKAGES_FOR_PROGRESS && is_tty && !is_ci;
        Self {
            bar: visible.then(|| extraction_bar(total_packages)).flatten(),
            failed: AtomicUsize::new(0),
        }
    }

    /// Counts failures but never draws.
    pub fn hidden() -> Self {
        Self {
            bar: None,
            failed: AtomicUsize::new(0),
        }
    }

    /// One package is done, successfully or not.
    pub fn record(&self, path: &Path, extracted: bool) {
        let failed = if extracted {
            self.failed.load(Ordering::Relaxed)
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed) + 1
        };

        if let Some(bar) = &self.bar {
            bar.inc(1);
            if !extracted {
                let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
                bar.set_message(format!("({failed} failed, last: {name})"));
            }
        }
    }

    /// Packages the decoder rejected so far.
    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

fn extraction_bar(total: usize) -> Option<ProgressBar> {
    let style = ProgressStyle::with_template(TEMPLATE)
        .ok()?
        .progress_chars("⣿⣀ ");
    let bar = ProgressBar::new(total as u64);
    bar.set_style(style);
    Some(bar)
}
