//! Summary statistics and raw sample export.
mod stats;
mod writer;


pub use stats::DelayStats;
pub use writer::write_delays;

/// The summary printed after a run, or `None` when there are no samples.
#[must_use]
pub fn summary_line(delays: &[u64]) -> Option<String> {
    DelayStats::from_samples(delays).map(|stats| {
        format!(
            "Average delay in ms: {} +/- {}",
            stats.mean_ms(),
            stats.stddev_ms()
        )
    })
}
