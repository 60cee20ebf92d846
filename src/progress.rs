use std::time::Instant;

use tracing::debug;

/// Row counter for long scans, logged through tracing
pub struct ProgressTracker {
    start_time: Instant,
    total_processed: u64,
    report_interval: u64,
}

impl ProgressTracker {
    pub fn new(report_interval: u64) -> Self {
        Self {
            start_time: Instant::now(),
            total_processed: 0,
            report_interval: report_interval.max(1),
        }
    }

    pub fn update(&mut self, processed: u64) {
        self.total_processed = processed;

        if self.total_processed % self.report_interval == 0 {
            self.report();
        }
    }

    fn rate(&self) -> (f64, f64) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            self.total_processed as f64 / elapsed
        } else {
            0.0
        };
        (elapsed, rate)
    }

    fn report(&self) {
        let (elapsed, rate) = self.rate();
        debug!(
            rows = self.total_processed,
            "processed {} rows | {:.0} rows/s | {:.1}s", self.total_processed, rate, elapsed
        );
    }

    pub fn finish(&self) {
        let (elapsed, rate) = self.rate();
        debug!(
            rows = self.total_processed,
            "scan complete: {} rows in {:.1}s ({:.0} rows/s)", self.total_processed, elapsed, rate
        );
    }

    pub fn total(&self) -> u64 {
        self.total_processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_tracks_latest_count() {
        let mut progress = ProgressTracker::new(10);
        progress.update(3);
        progress.update(10);
        progress.update(11);
        assert_eq!(progress.total(), 11);
        progress.finish();
    }

    #[test]
    fn test_zero_interval_does_not_panic() {
        let mut progress = ProgressTracker::new(0);
        progress.update(1);
        assert_eq!(progress.total(), 1);
    }
}
