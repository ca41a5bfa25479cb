//! Environment step.
use super::Env;

/// Additional information to `Obs` and `Act`.
pub trait Info {}

impl Info for () {}

/// Represents an action, observation and reward tuple `(a_t, o_t+1, r_t)`
/// with the episode-end signals of the step.
///
/// An environment emits a [`Step`] object at every interaction step.
pub struct Step<E: Env> {
    /// Action.
    pub act: E::Act,

    /// Observation.
    pub obs: E::Obs,

    /// Reward.
    pub reward: f32,

    /// `true` if the episode ended in a physically meaningful state
    /// (e.g., the ball fell off the beam).
    pub is_terminated: bool,

    /// `true` if the episode was cut short by an external limit, such as a
    /// step ceiling, regardless of the physical outcome.
    pub is_truncated: bool,

    /// Information defined by user.
    pub info: E::Info,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(
        obs: E::Obs,
        act: E::Act,
        reward: f32,
        is_terminated: bool,
        is_truncated: bool,
        info: E::Info,
    ) -> Self {
        Step {
            act,
            obs,
            reward,
            is_terminated,
            is_truncated,
            info,
        }
    }

    /// Terminated or truncated.
    ///
    /// The two signals are orthogonal; either alone ends the episode.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.is_truncated
    }
}

impl<E: Env> std::fmt::Debug for Step<E>
where
    E::Act: std::fmt::Debug,
    E::Obs: std::fmt::Debug,
    E::Info: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("act", &self.act)
            .field("obs", &self.obs)
            .field("reward", &self.reward)
            .field("is_terminated", &self.is_terminated)
            .field("is_truncated", &self.is_truncated)
            .field("info", &self.info)
            .finish()
    }
}
