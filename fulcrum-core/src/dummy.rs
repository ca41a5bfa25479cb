//! Functional test doubles.
//!
//! These types implement the core contracts with trivial, fully deterministic
//! behavior. They are used by the tests of this crate and of downstream
//! crates to drive the [`Trainer`](crate::Trainer) and
//! [`Evaluator`](crate::Evaluator) without a physics engine or a learner.
use crate::{Act, Agent, Configurable, Env, Obs, Policy, Step};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Write, marker::PhantomData, path::Path};

/// Dummy observation: the current step index of the episode.
#[derive(Clone, Debug, PartialEq)]
pub struct DummyObs(pub f32);

impl Obs for DummyObs {
    fn len(&self) -> usize {
        1
    }
}

impl AsRef<[f32]> for DummyObs {
    fn as_ref(&self) -> &[f32] {
        std::slice::from_ref(&self.0)
    }
}

/// Dummy action holding a single scalar.
#[derive(Clone, Debug, PartialEq)]
pub struct DummyAct(pub f32);

impl Act for DummyAct {
    fn len(&self) -> usize {
        1
    }
}

impl From<f32> for DummyAct {
    fn from(v: f32) -> Self {
        Self(v)
    }
}

/// Configuration of [`DummyEnv`].
#[derive(Clone, Debug)]
pub struct DummyEnvConfig {
    /// Episode length after which the environment terminates.
    pub episode_len: usize,
}

/// Deterministic environment that terminates after a fixed number of steps.
///
/// Emits one unit of reward per step; the observation is the step index.
pub struct DummyEnv {
    episode_len: usize,
    steps: usize,
}

impl Env for DummyEnv {
    type Config = DummyEnvConfig;
    type Obs = DummyObs;
    type Act = DummyAct;
    type Info = ();

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            episode_len: config.episode_len,
            steps: 0,
        })
    }

    fn reset(&mut self, _seed: Option<i64>) -> Result<(Self::Obs, Self::Info)> {
        self.steps = 0;
        Ok((DummyObs(0.0), ()))
    }

    fn step(&mut self, _act: &Self::Act) -> Result<Step<Self>> {
        self.steps += 1;
        let terminated = self.steps >= self.episode_len;
        Ok(Step::new(
            DummyObs(self.steps as f32),
            DummyAct(0.0),
            1.0,
            terminated,
            false,
            (),
        ))
    }

    fn render(&mut self) {}

    fn close(&mut self) {}
}

/// Configuration of [`DummyAgent`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DummyAgentConfig {
    /// The constant action emitted by the agent.
    pub action: f32,
}

/// Agent emitting a constant action and counting observed transitions.
///
/// Works with any environment whose action type converts from `f32`.
pub struct DummyAgent<E> {
    action: f32,
    train: bool,
    n_observed: usize,
    phantom: PhantomData<E>,
}

impl<E> DummyAgent<E> {
    /// Number of transitions fed to the agent so far.
    pub fn n_observed(&self) -> usize {
        self.n_observed
    }
}

impl<E: Env> Configurable for DummyAgent<E> {
    type Config = DummyAgentConfig;

    fn build(config: Self::Config) -> Self {
        Self {
            action: config.action,
            train: false,
            n_observed: 0,
            phantom: PhantomData,
        }
    }
}

impl<E: Env> Policy<E> for DummyAgent<E>
where
    E::Act: From<f32>,
{
    fn sample(&mut self, _obs: &E::Obs) -> E::Act {
        E::Act::from(self.action)
    }
}

impl<E: Env> Agent<E> for DummyAgent<E>
where
    E::Act: From<f32>,
{
    fn train(&mut self) {
        self.train = true;
    }

    fn eval(&mut self) {
        self.train = false;
    }

    fn is_train(&self) -> bool {
        self.train
    }

    fn observe(&mut self, _step: Step<E>) {
        self.n_observed += 1;
    }

    fn save_params(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self.n_observed)?.as_bytes())?;
        Ok(())
    }

    fn load_params(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)?;
        self.n_observed = serde_yaml::from_reader(std::io::BufReader::new(file))?;
        Ok(())
    }
}
