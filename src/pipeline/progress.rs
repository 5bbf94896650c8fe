// file: src/pipeline/progress.rs
// description: progress tracking and statistics for repository list runs
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub repos_processed: usize,
    pub repos_failed: usize,
    pub paths_collected: usize,
    pub duration_secs: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repos_total(&self) -> usize {
        self.repos_processed + self.repos_failed
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.repos_total();
        if total == 0 {
            return 0.0;
        }
        (self.repos_processed as f64 / total as f64) * 100.0
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} of {} repositories ({:.1}% ok), {} paths collected in {}s",
            self.repos_processed,
            self.repos_total(),
            self.success_rate(),
            self.paths_collected,
            self.duration_secs
        )
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    stats: RunStats,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_repos: usize, colored: bool) -> Self {
        Self::from_bar(create_progress_bar(total_repos as u64, colored))
    }

    /// Tracker that never draws, for callers without a terminal.
    pub fn hidden() -> Self {
        Self::from_bar(ProgressBar::hidden())
    }

    fn from_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            stats: RunStats::new(),
            start_time: Instant::now(),
        }
    }

    pub fn start_repo(&self, url: &str) {
        self.bar.set_message(url.to_string());
    }

    pub fn repo_succeeded(&mut self, paths: usize) {
        self.stats.repos_processed += 1;
        self.stats.paths_collected += paths;
        self.bar.inc(1);
    }

    pub fn repo_failed(&mut self) {
        self.stats.repos_failed += 1;
        self.bar.inc(1);
    }

    /// Run `f` with the bar cleared so terminal output isn't garbled.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> RunStats {
        RunStats {
            duration_secs: self.start_time.elapsed().as_secs(),
            ..self.stats.clone()
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    let style = ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(if colored { "█▓▒░" } else { "=>-" });
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_run_stats_success_rate() {
        let stats = RunStats {
            repos_processed: 3,
            repos_failed: 1,
            paths_collected: 40,
            duration_secs: 2,
        };

        assert_eq!(stats.repos_total(), 4);
        assert!((stats.success_rate() - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_run_stats_summary_includes_duration() {
        let stats = RunStats {
            repos_processed: 1,
            repos_failed: 1,
            paths_collected: 9,
            duration_secs: 42,
        };

        assert_eq!(
            stats.to_string(),
            "Processed 1 of 2 repositories (50.0% ok), 9 paths collected in 42s"
        );
    }

    #[test]
    fn test_run_stats_empty() {
        assert_eq!(RunStats::new().success_rate(), 0.0);
    }

    #[test]
    fn test_progress_tracker_counts() {
        let mut tracker = ProgressTracker::hidden();

        tracker.start_repo("https://example.com/a.git");
        tracker.repo_succeeded(12);
        tracker.repo_failed();
        tracker.repo_succeeded(3);

        let stats = tracker.get_stats();
        assert_eq!(stats.repos_processed, 2);
        assert_eq!(stats.repos_failed, 1);
        assert_eq!(stats.paths_collected, 15);
    }

    #[test]
    fn test_suspend_returns_value() {
        let tracker = ProgressTracker::with_color(2, false);
        assert_eq!(tracker.suspend(|| 7), 7);
    }
}
