//! Beam-and-ball balancing reinforcement learning toolkit.
//!
//! Fulcrum consists of the following crates:
//!
//! * [fulcrum-core](fulcrum_core) provides the traits generic to
//!   environments and agents, the training loop driver and the evaluation
//!   driver.
//! * [fulcrum-beam-env](fulcrum_beam_env) adapts a beam-and-ball physics
//!   engine, behind the opaque [`Simulator`] trait, to the standard
//!   environment contract.
//! * [fulcrum-policy-no-backend](fulcrum_policy_no_backend) loads persisted
//!   policy bundles and runs deterministic inference without any deep
//!   learning backend; it also defines [`PpoConfig`], the hyperparameter set
//!   of the external policy optimizer.
//!
//! This crate wires them together into the two top-level operations of the
//! system: [`train`] and [`evaluate`].
use anyhow::Result;
use log::info;
use std::path::Path;

pub use fulcrum_beam_env::{BeamAct, BeamEnv, BeamEnvConfig, BeamObs, SimStep, Simulator};
pub use fulcrum_core::{
    record::{ProgressReporter, Record, RunHistory},
    Agent, Configurable, DefaultEvaluator, Env, Evaluator, Policy, Step, Trainer, TrainerConfig,
};
pub use fulcrum_policy_no_backend::{Mat, Mlp, MlpPolicy, PpoConfig};

/// Seed of the training environment.
pub const TRAIN_SEED: i64 = 0;

/// Seed of the evaluation environment, held out from training.
pub const EVAL_SEED: i64 = 42;

/// Trains a balancing policy on the given scene.
///
/// Builds one environment adapter with the fixed training seed and
/// per-episode randomization enabled, instantiates the external learner `A`
/// with the fixed [`PpoConfig`] hyperparameter set, and drives it for exactly
/// `total_timesteps` interaction steps with a [`ProgressReporter`] attached.
/// The resulting policy bundle is persisted at `save_path`.
pub fn train<S, A>(scene: &Path, total_timesteps: usize, save_path: &Path) -> Result<RunHistory>
where
    S: Simulator,
    A: Agent<BeamEnv<S>> + Configurable<Config = PpoConfig>,
{
    info!(
        "Training for {} timesteps on scene {:?}",
        total_timesteps, scene
    );
    info!("The policy bundle will be saved to {:?}", save_path);

    let env_config = BeamEnvConfig::default()
        .scene_path(scene)
        .random_init(true)
        .headless(true);
    let env = BeamEnv::<S>::build(&env_config, TRAIN_SEED)?;
    let mut agent = A::build(PpoConfig::default());
    let mut reporter = ProgressReporter::new();
    let mut trainer = Trainer::build(
        TrainerConfig::default()
            .total_timesteps(total_timesteps)
            .model_dir(save_path.to_string_lossy()),
    );

    trainer.train(env, &mut agent, &mut reporter)
}

/// Evaluates a trained policy on the given scene.
///
/// Runs `n_episodes` full episodes with per-episode randomization disabled
/// and the held-out evaluation seed. With `render` set, the adapter paces
/// each step to the simulator's frame interval; headless evaluation runs at
/// full speed.
pub fn evaluate<S, P>(
    scene: &Path,
    policy: &mut P,
    n_episodes: usize,
    render: bool,
) -> Result<Record>
where
    S: Simulator,
    P: Policy<BeamEnv<S>>,
{
    let env_config = BeamEnvConfig::default()
        .scene_path(scene)
        .random_init(false)
        .headless(!render);
    let mut evaluator = DefaultEvaluator::<BeamEnv<S>>::new(&env_config, EVAL_SEED, n_episodes)?;

    evaluator.evaluate(policy)
}
