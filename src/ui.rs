// ui.rs

use crate::error::Result;
use crate::render::RenderedBlock;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress bar over the samples of one render pass
pub fn create_render_progress(total_samples: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::with_draw_target(Some(total_samples), ProgressDrawTarget::stderr());
    if let Ok(style) =
        ProgressStyle::default_bar().template("{prefix:.bold} [{bar:40.cyan}] {pos}/{len} {wide_msg}")
    {
        pb.set_style(style.progress_chars("⣀⣤⣦⣶⣷⣿ "));
    }
    pb.set_prefix("Render");
    pb
}

pub fn update_render_progress(pb: &ProgressBar, block: &RenderedBlock) {
    pb.inc(block.block_size);
    pb.set_message(format!(
        "PPQ: {}, Transport: {}",
        block.info.ppq_position,
        if block.info.is_playing { "playing" } else { "stopped" }
    ));
}

/// Runs `job` against the bar and clears it whether or not the job failed
pub fn with_render_progress<T, F>(pb: &ProgressBar, job: F) -> Result<T>
where
    F: FnOnce(&ProgressBar) -> Result<T>,
{
    let result = job(pb);
    pb.finish_and_clear();
    result
}

/// One line per block for the timeline printout
pub fn format_block(block: &RenderedBlock) -> String {
    format!(
        "{:>6} {:>10} {:>10} {:>12.4} {:>10.4} {:>8} {:>8}",
        block.index,
        block.block_start.get(),
        block.info.sample_position.get(),
        block.info.ppq_position.get(),
        block.info.bar_start_ppq.get(),
        block.info.is_playing,
        block.info.transport_changed
    )
}

pub fn timeline_header() -> String {
    format!(
        "{:>6} {:>10} {:>10} {:>12} {:>10} {:>8} {:>8}",
        "block", "start", "frame", "ppq", "bar", "playing", "changed"
    )
}
