//! Environment.
use super::{Act, Info, Obs, Step};
use anyhow::Result;

/// Represents an environment, typically an MDP.
///
/// An environment owns whatever engine produces its dynamics. It exposes the
/// standard interaction contract: `reset` starts an episode and returns the
/// initial observation together with auxiliary information, `step` applies an
/// action and returns a [`Step`] carrying the next observation, the reward and
/// the two episode-end signals (see [`Step::is_terminated`] and
/// [`Step::is_truncated`]).
pub trait Env {
    /// Configuration of the environment.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Auxiliary information attached to [`Step`] and returned by [`Env::reset`].
    type Info: Info;

    /// Builds an environment with a given random seed.
    ///
    /// Construction fails fast when the underlying engine cannot be
    /// initialized; implementations must not hand out an environment that
    /// would produce degraded observations.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the environment and starts a new episode.
    ///
    /// When `seed` is given, it replaces the environment's internal random
    /// source before the episode starts.
    fn reset(&mut self, seed: Option<i64>) -> Result<(Self::Obs, Self::Info)>;

    /// Performs an environment step.
    fn step(&mut self, act: &Self::Act) -> Result<Step<Self>>
    where
        Self: Sized;

    /// Renders the current state of the environment.
    ///
    /// A no-op for headless environments.
    fn render(&mut self);

    /// Releases resources owned by the environment itself.
    ///
    /// Must be safe to call multiple times and at any point of the episode
    /// lifecycle.
    fn close(&mut self);
}
