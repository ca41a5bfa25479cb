//! Adapter errors.
use thiserror::Error;

/// Errors raised by [`BeamEnv`](crate::BeamEnv).
///
/// Simulator failures (bad scene reference, numeric instability mid-rollout)
/// are not listed here; they propagate untouched from the engine, since
/// silently continuing with corrupted physics state would invalidate the
/// collected data.
#[derive(Debug, Error)]
pub enum BeamEnvError {
    /// The action does not carry exactly one torque value.
    #[error("malformed action: expected a single torque value, got {0} elements")]
    MalformedAction(usize),

    /// `step` was called before the first `reset`.
    #[error("step() called before reset()")]
    NotStarted,

    /// `step` was called on a finished episode.
    #[error("step() called on a finished episode; episodes do not self-restart, call reset()")]
    EpisodeOver,
}
