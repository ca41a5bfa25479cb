//! Contract of the underlying physics engine.
use anyhow::Result;
use std::path::Path;

/// Raw output of one simulator step.
#[derive(Clone, Debug)]
pub struct SimStep {
    /// Raw observation vector, in simulator units.
    pub obs: Vec<f32>,

    /// Reward of the step.
    pub reward: f32,

    /// The episode ended in a physically meaningful state.
    pub terminated: bool,

    /// The episode was cut short by the simulator itself.
    pub truncated: bool,
}

/// A beam-and-ball physics engine.
///
/// The engine is an external collaborator; the adapter only relies on this
/// capability set and never inspects the physics. Construction binds the
/// engine to a scene description and a seed; resetting with the same seed is
/// deterministic, which is why [`BeamEnv`](crate::BeamEnv) reconstructs the
/// engine with a fresh seed when per-episode randomization is requested.
pub trait Simulator: Sized {
    /// Constructs the engine for a scene.
    ///
    /// * `scene` - Path of the declarative scene description, opaque to the
    ///   adapter.
    /// * `seed` - Seed of the engine's initial configuration.
    /// * `dt` - Simulation time step, also the frame interval when rendering.
    /// * `headless` - If `true`, the engine must not open any display.
    fn build(scene: &Path, seed: u64, dt: f64, headless: bool) -> Result<Self>;

    /// Resets the engine to its initial state and returns the raw observation.
    fn reset(&mut self) -> Result<Vec<f32>>;

    /// Advances the simulation by one time step with the given torque.
    fn step(&mut self, torque: f32) -> Result<SimStep>;

    /// Renders the current state.
    fn render(&mut self);
}
