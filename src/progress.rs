//! Byte-based progress bar over compressed input.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const BAR_TEMPLATE: &str = "{spinner:.green} {msg} {bytes:>10}/{total_bytes:<10} [{bar:.cyan/blue}] {percent:>3}%  \
     {bytes_per_sec}  elapsed: {elapsed_precise}  eta: {eta_precise}";

pub fn make_progress_bar_labeled(total_bytes: u64, label: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);
    match ProgressStyle::with_template(BAR_TEMPLATE) {
        Ok(style) => pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  ")),
        Err(e) => tracing::debug!(error = %e, "progress template rejected; using default style"),
    }
    if let Some(msg) = label {
        pb.set_message(msg.to_string());
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
