#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal wiring for the resume extraction binary: a per-file progress
//! bar and a logger that shares the terminal with it.

use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use resume_extract_batch::ProgressCallback;

pub use indicatif::MultiProgress;

/// Shows batch progress as one bar tick per processed resume.
pub struct IndicatifProgress {
    bar: ProgressBar,
    /// Used once the number of resumes is known.
    counted_style: ProgressStyle,
}

impl IndicatifProgress {
    /// Adds a resume counter to `multi`.
    ///
    /// It spins with `message` until [`ProgressCallback::set_total`]
    /// reports how many PDFs the scan found, then counts them off.
    #[must_use]
    pub fn files_bar(multi: &MultiProgress, message: &str) -> Arc<dyn ProgressCallback> {
        let bar = multi.add(ProgressBar::new_spinner());
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());

        let counted_style = ProgressStyle::with_template(
            "{wide_bar:.cyan/dim} {pos}/{len} [{elapsed_precise}] {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");

        Arc::new(Self { bar, counted_style })
    }
}

impl ProgressCallback for IndicatifProgress {
    fn set_total(&self, total: u64) {
        self.bar.set_length(total);
        self.bar.set_position(0);
        self.bar.set_style(self.counted_style.clone());
    }

    fn inc(&self, delta: u64) {
        self.bar.inc(delta);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}

/// Installs `pretty_env_logger` (filtered by `RUST_LOG`) behind an
/// `indicatif-log-bridge` wrapper.
///
/// Progress bars must be added to the returned [`MultiProgress`] for log
/// lines to print above them instead of through them.
#[must_use]
pub fn init_logger() -> MultiProgress {
    let multi = MultiProgress::new();

    let logger = pretty_env_logger::formatted_builder()
        .parse_env("RUST_LOG")
        .build();
    let level = logger.filter();

    indicatif_log_bridge::LogWrapper::new(multi.clone(), logger)
        .try_init()
        .ok(); // already installed

    log::set_max_level(level);

    multi
}
