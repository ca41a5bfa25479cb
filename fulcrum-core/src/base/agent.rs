//! Agent.
use super::{Env, Policy, Step};
use anyhow::Result;
use std::path::Path;

/// Represents a trainable policy on an environment.
///
/// The optimization algorithm behind an agent is opaque to the rest of the
/// library: an agent observes transitions through [`Agent::observe`] and is
/// free to update its parameters at whatever cadence it chooses (typically at
/// rollout boundaries). The [`Trainer`](crate::Trainer) never inspects the
/// agent beyond this capability set.
pub trait Agent<E: Env>: Policy<E> {
    /// Set the policy to training mode.
    fn train(&mut self);

    /// Set the policy to evaluation mode.
    ///
    /// In evaluation mode, [`Policy::sample`] is expected to return the
    /// deterministic (non-sampled) action.
    fn eval(&mut self);

    /// Return if it is in training mode.
    fn is_train(&self) -> bool;

    /// Feeds one transition to the agent.
    ///
    /// The observation preceding the transition is the one the agent last
    /// produced an action for, so the [`Step`] object carries everything the
    /// agent needs to assemble `(o_t, a_t, o_t+1, r_t)`.
    fn observe(&mut self, step: Step<E>);

    /// Save the parameters of the agent at the given path.
    fn save_params(&self, path: &Path) -> Result<()>;

    /// Load the parameters of the agent from the given path.
    fn load_params(&mut self, path: &Path) -> Result<()>;
}
