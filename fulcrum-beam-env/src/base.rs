//! Environment adapter for a beam-and-ball physics engine.
use crate::{
    config::BeamEnvConfig, ActFilter, BeamAct, BeamEnvError, BeamObs, ObsFilter, SimStep, Simulator,
};
use anyhow::Result;
use fulcrum_core::{Env, Info, Step};
use log::{info, trace};
use std::{path::PathBuf, time::Duration};

/// Upper bound (exclusive) of per-episode simulator seeds.
const SEED_BOUND: u64 = 1 << 31;

/// Information given at every step of the interaction with the environment.
///
/// Currently, it is empty and reserved for future diagnostics.
#[derive(Debug)]
pub struct BeamInfo {}

impl Info for BeamInfo {}

/// State of the current episode.
///
/// Data only: the seed the simulator was constructed with, the step counter
/// and the two episode-end flags. The flags are orthogonal; `terminated` is
/// driven by the physics, `truncated` by the adapter's step ceiling or the
/// simulator's own external limit.
#[derive(Clone, Debug, Default)]
pub struct EpisodeState {
    /// Seed of the current simulator instance.
    pub sim_seed: u64,

    /// Steps taken since the last reset.
    pub steps: usize,

    /// The episode ended in a physically meaningful state.
    pub terminated: bool,

    /// The episode was cut short by a step limit.
    pub truncated: bool,
}

/// Lifecycle of an episode within the adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
enum EpisodeStatus {
    /// Constructed, no episode started yet.
    Ready,
    /// An episode is in flight.
    Running,
    /// The episode ended; only a reset starts a new one.
    Done,
}

/// A beam-and-ball balancing environment wrapping an opaque [`Simulator`].
///
/// The adapter holds exclusive ownership of exactly one simulator instance at
/// a time. With `random_init` enabled, every reset draws a fresh integer seed
/// from the adapter's internal random source and reconstructs the simulator
/// with it, so successive episodes sample distinct initial configurations
/// even though the simulator's own reset is deterministic per seed. The old
/// instance is dropped atomically with the swap.
///
/// Episode truncation at the configured step ceiling is enforced here,
/// independent of the simulator's own truncation signal; either signal alone
/// ends the episode.
pub struct BeamEnv<S: Simulator> {
    scene_path: PathBuf,
    sim: S,
    rng: fastrand::Rng,
    random_init: bool,
    dt: f64,
    headless: bool,
    max_steps: usize,
    wait: Duration,
    obs_filter: ObsFilter,
    act_filter: ActFilter,
    episode: EpisodeState,
    status: EpisodeStatus,
}

impl<S: Simulator> BeamEnv<S> {
    /// State of the current episode.
    pub fn episode(&self) -> &EpisodeState {
        &self.episode
    }

    fn apply(&mut self, raw: SimStep, act: &BeamAct) -> Step<Self> {
        self.episode.terminated = raw.terminated;
        self.episode.truncated = raw.truncated || self.episode.steps >= self.max_steps;
        if self.episode.terminated || self.episode.truncated {
            self.status = EpisodeStatus::Done;
        }

        Step::new(
            self.obs_filter.filt(raw.obs),
            act.clone(),
            raw.reward,
            self.episode.terminated,
            self.episode.truncated,
            BeamInfo {},
        )
    }
}

impl<S: Simulator> Env for BeamEnv<S> {
    type Config = BeamEnvConfig;
    type Obs = BeamObs;
    type Act = BeamAct;
    type Info = BeamInfo;

    /// Constructs the adapter and its simulator.
    ///
    /// Fails fast when the simulator cannot be initialized for the given
    /// scene; no degraded environment is ever handed out.
    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let sim = S::build(&config.scene_path, seed as u64, config.dt, config.headless)?;
        info!("Initialized simulator for scene {:?}", config.scene_path);

        Ok(Self {
            scene_path: config.scene_path.clone(),
            sim,
            rng: fastrand::Rng::with_seed(seed as u64),
            random_init: config.random_init,
            dt: config.dt,
            headless: config.headless,
            max_steps: config.max_steps,
            wait: Duration::from_secs_f64(config.dt),
            obs_filter: ObsFilter::default(),
            act_filter: ActFilter::default(),
            episode: EpisodeState {
                sim_seed: seed as u64,
                ..Default::default()
            },
            status: EpisodeStatus::Ready,
        })
    }

    fn reset(&mut self, seed: Option<i64>) -> Result<(Self::Obs, Self::Info)> {
        if let Some(seed) = seed {
            self.rng = fastrand::Rng::with_seed(seed as u64);
        }

        if self.random_init {
            let sim_seed = self.rng.u64(..SEED_BOUND);
            // A fresh instance, not the simulator's own reset: the engine's
            // reset is deterministic per seed and would replay the same
            // initial configuration every episode.
            self.sim = S::build(&self.scene_path, sim_seed, self.dt, self.headless)?;
            self.episode.sim_seed = sim_seed;
            trace!("reconstructed simulator with seed {}", sim_seed);
        }

        let raw = self.sim.reset()?;
        self.episode.steps = 0;
        self.episode.terminated = false;
        self.episode.truncated = false;
        self.status = EpisodeStatus::Running;

        Ok((self.obs_filter.filt(raw), BeamInfo {}))
    }

    fn step(&mut self, act: &Self::Act) -> Result<Step<Self>> {
        match self.status {
            EpisodeStatus::Ready => return Err(BeamEnvError::NotStarted.into()),
            EpisodeStatus::Done => return Err(BeamEnvError::EpisodeOver.into()),
            EpisodeStatus::Running => {}
        }

        let torque = self.act_filter.filt(act)?;
        let raw = self.sim.step(torque)?;
        self.episode.steps += 1;

        Ok(self.apply(raw, act))
    }

    /// Renders the simulator and paces the loop to the frame interval.
    ///
    /// A no-op when headless, so non-rendered runs are never throttled.
    fn render(&mut self) {
        if !self.headless {
            self.sim.render();
            std::thread::sleep(self.wait);
        }
    }

    fn close(&mut self) {
        // The adapter owns nothing beyond the simulator instance itself.
        trace!("BeamEnv::close()");
    }
}
