//! Run history of a training loop.

/// Return and length of one completed episode.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeStats {
    /// Cumulative reward of the episode.
    pub ret: f32,

    /// Number of environment steps in the episode.
    pub len: usize,
}

/// State of a training run: the total number of interaction steps and an
/// append-only buffer of completed-episode statistics.
///
/// The history is used for reporting only; it is never fed back into the
/// environment or the agent. Completed episodes are appended in completion
/// order and existing entries are never mutated, which lets observers keep a
/// simple cursor into the buffer (see
/// [`ProgressReporter`](crate::record::ProgressReporter)).
#[derive(Debug, Clone, Default)]
pub struct RunHistory {
    total_steps: usize,
    episodes: Vec<EpisodeStats>,
}

impl RunHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the interaction step counter by `n`.
    pub fn advance(&mut self, n: usize) {
        self.total_steps += n;
    }

    /// Appends a completed episode.
    pub fn push_episode(&mut self, stats: EpisodeStats) {
        self.episodes.push(stats);
    }

    /// Total number of interaction steps so far.
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Completed episodes, in completion order.
    pub fn episodes(&self) -> &[EpisodeStats] {
        &self.episodes
    }
}
