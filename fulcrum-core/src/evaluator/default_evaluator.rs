//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{
    record::{Record, RecordValue},
    Env, Policy,
};
use anyhow::Result;
use log::info;

/// A default implementation of the [`Evaluator`] trait.
///
/// Runs a fixed number of full episodes against its own environment instance
/// and reports the step count and cumulative return of each episode, plus the
/// average return across episodes.
///
/// The evaluator renders after every step; for a headless environment this is
/// a no-op and the loop runs unthrottled. Pacing of a visualized run is the
/// environment's concern, so throttling never affects the measured results.
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        if self.n_episodes == 0 {
            return Ok(Record::empty());
        }

        let mut returns = Vec::with_capacity(self.n_episodes);
        let mut lengths = Vec::with_capacity(self.n_episodes);

        for ix in 0..self.n_episodes {
            let (mut prev_obs, _) = self.env.reset(None)?;
            let mut r_total = 0f32;
            let mut steps = 0usize;

            loop {
                let act = policy.sample(&prev_obs);
                let step = self.env.step(&act)?;
                self.env.render();
                r_total += step.reward;
                steps += 1;
                if step.is_done() {
                    break;
                }
                prev_obs = step.obs;
            }

            info!("Episode {}: steps = {}, return = {:.2}", ix + 1, steps, r_total);
            returns.push(r_total);
            lengths.push(steps as f32);
        }

        self.env.close();

        let mean = returns.iter().sum::<f32>() / returns.len() as f32;
        let mut record = Record::from_scalar("Episode return", mean);
        record.insert("episode_returns", RecordValue::Array1(returns));
        record.insert("episode_lengths", RecordValue::Array1(lengths));
        Ok(record)
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// * `config` - Configuration of the evaluation environment.
    /// * `seed` - Random seed of the evaluation environment, typically held
    ///   out from the seeds used during training.
    /// * `n_episodes` - Number of episodes to run during evaluation.
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            env: E::build(config, seed)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy::{DummyAgent, DummyAgentConfig, DummyEnv, DummyEnvConfig};
    use crate::Configurable;

    #[test]
    fn test_reports_per_episode_stats() -> Result<()> {
        let config = DummyEnvConfig { episode_len: 4 };
        let mut evaluator = DefaultEvaluator::<DummyEnv>::new(&config, 42, 3)?;
        let mut policy = DummyAgent::build(DummyAgentConfig::default());

        let record = evaluator.evaluate(&mut policy)?;

        // One unit of reward per step, four steps per episode.
        assert_eq!(record.get_scalar("Episode return")?, 4.0);
        assert_eq!(record.get_array1("episode_lengths")?, vec![4.0, 4.0, 4.0]);
        assert_eq!(record.get_array1("episode_returns")?.len(), 3);
        Ok(())
    }

    #[test]
    fn test_zero_episodes_yields_empty_record() -> Result<()> {
        let config = DummyEnvConfig { episode_len: 4 };
        let mut evaluator = DefaultEvaluator::<DummyEnv>::new(&config, 42, 0)?;
        let mut policy = DummyAgent::build(DummyAgentConfig::default());

        let record = evaluator.evaluate(&mut policy)?;
        assert!(record.is_empty());
        Ok(())
    }
}
