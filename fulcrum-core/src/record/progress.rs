//! Periodic console reporting of training progress.
use super::{EpisodeStats, RunHistory};
use log::{info, trace};

/// Number of trailing episodes summarized in each report.
const TRAILING_WINDOW: usize = 100;

/// Default reporting cadence in interaction steps.
const DEFAULT_REPORT_INTERVAL: usize = 10_000;

/// Observes a [`RunHistory`] and periodically logs a summary.
///
/// The reporter keeps a cursor into the history's episode buffer and absorbs
/// only entries beyond it, so observing the same history again never double
/// counts an episode. Every `report_interval` cumulative steps it logs the
/// step count, the episode count and the mean/standard deviation of returns
/// and mean length over the trailing [`TRAILING_WINDOW`] episodes. While no
/// episode has completed, reports degrade to a trace-level note.
///
/// The reporter is purely observational; it never feeds anything back into
/// the training loop.
#[derive(Debug)]
pub struct ProgressReporter {
    report_interval: usize,
    absorbed: Vec<EpisodeStats>,
    cursor: usize,
    next_report: usize,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    /// Creates a reporter with the default cadence.
    pub fn new() -> Self {
        Self {
            report_interval: DEFAULT_REPORT_INTERVAL,
            absorbed: Vec::new(),
            cursor: 0,
            next_report: DEFAULT_REPORT_INTERVAL,
        }
    }

    /// Sets the reporting cadence in interaction steps.
    pub fn report_interval(mut self, v: usize) -> Self {
        assert!(v > 0, "report interval must be positive");
        self.report_interval = v;
        self.next_report = v;
        self
    }

    /// Absorbs newly completed episodes and reports if a cadence boundary
    /// has been crossed.
    pub fn observe(&mut self, history: &RunHistory) {
        let episodes = history.episodes();
        if episodes.len() > self.cursor {
            self.absorbed.extend_from_slice(&episodes[self.cursor..]);
            self.cursor = episodes.len();
        }

        // One summary per crossed boundary, exact for any observation granularity.
        while history.total_steps() >= self.next_report {
            self.emit(self.next_report);
            self.next_report += self.report_interval;
        }
    }

    /// Number of episodes absorbed so far.
    pub fn episode_count(&self) -> usize {
        self.absorbed.len()
    }

    /// Mean return over the trailing report window.
    pub fn mean_return(&self) -> Option<f32> {
        let returns = self.trailing_returns();
        match returns.is_empty() {
            true => None,
            false => Some(mean(&returns)),
        }
    }

    /// Best return over all absorbed episodes.
    pub fn best_return(&self) -> Option<f32> {
        self.absorbed
            .iter()
            .map(|e| e.ret)
            .max_by(|x, y| x.total_cmp(y))
    }

    fn trailing(&self) -> &[EpisodeStats] {
        let skip = self.absorbed.len().saturating_sub(TRAILING_WINDOW);
        &self.absorbed[skip..]
    }

    fn trailing_returns(&self) -> Vec<f32> {
        self.trailing().iter().map(|e| e.ret).collect()
    }

    fn emit(&self, steps: usize) {
        if self.absorbed.is_empty() {
            trace!("Step {}: no completed episodes yet", steps);
            return;
        }

        let returns = self.trailing_returns();
        let lengths: Vec<f32> = self.trailing().iter().map(|e| e.len as f32).collect();
        let m = mean(&returns);

        info!("Step: {}", steps);
        info!("Episodes: {}", self.absorbed.len());
        info!(
            "Mean return (last {} eps): {:.2} +/- {:.2}",
            returns.len(),
            m,
            std(&returns, m)
        );
        info!(
            "Mean length (last {} eps): {:.1}",
            lengths.len(),
            mean(&lengths)
        );
    }
}

fn mean(vs: &[f32]) -> f32 {
    vs.iter().sum::<f32>() / vs.len() as f32
}

fn std(vs: &[f32], mean: f32) -> f32 {
    let var = vs.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / vs.len() as f32;
    var.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_with(n_episodes: usize, steps: usize) -> RunHistory {
        let mut history = RunHistory::new();
        history.advance(steps);
        for i in 0..n_episodes {
            history.push_episode(EpisodeStats {
                ret: i as f32,
                len: 10 * (i + 1),
            });
        }
        history
    }

    #[test]
    fn test_absorption_is_idempotent() {
        let history = history_with(3, 50);
        let mut reporter = ProgressReporter::new();

        reporter.observe(&history);
        assert_eq!(reporter.episode_count(), 3);

        // Replaying the same records must not double-count them.
        reporter.observe(&history);
        reporter.observe(&history);
        assert_eq!(reporter.episode_count(), 3);
    }

    #[test]
    fn test_absorbs_only_new_records() {
        let mut history = history_with(2, 20);
        let mut reporter = ProgressReporter::new();
        reporter.observe(&history);

        history.push_episode(EpisodeStats { ret: 7.0, len: 5 });
        reporter.observe(&history);

        assert_eq!(reporter.episode_count(), 3);
        assert_eq!(reporter.best_return(), Some(7.0));
    }

    #[test]
    fn test_empty_history_reports_nothing() {
        let mut reporter = ProgressReporter::new().report_interval(10);
        let mut history = RunHistory::new();
        history.advance(100);

        // Must not panic on an empty episode buffer.
        reporter.observe(&history);
        assert_eq!(reporter.episode_count(), 0);
        assert_eq!(reporter.mean_return(), None);
        assert_eq!(reporter.best_return(), None);
    }

    #[test]
    fn test_trailing_window() {
        let history = history_with(150, 0);
        let mut reporter = ProgressReporter::new();
        reporter.observe(&history);

        // Returns are 0..150; the trailing 100 are 50..150.
        let expected = (50..150).map(|v| v as f32).sum::<f32>() / 100.0;
        assert_eq!(reporter.mean_return(), Some(expected));
        assert_eq!(reporter.best_return(), Some(149.0));
    }
}
