//! Train [`Agent`].
mod config;
use crate::{
    record::{EpisodeStats, ProgressReporter, RunHistory},
    Agent, Env,
};
use anyhow::Result;
pub use config::TrainerConfig;
use log::info;
use std::path::Path;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Manages the training loop and related objects.
///
/// # Training loop
///
/// Given an environment, an agent implementing [`Agent`] and a
/// [`ProgressReporter`]:
///
/// 1. Reset the environment and set the agent to training mode.
/// 2. Sample an action from the agent, apply it to the environment and feed
///    the resulting transition back to the agent with [`Agent::observe`].
///    The agent updates its parameters at its own cadence; the trainer never
///    triggers optimization explicitly.
/// 3. Account the step in the [`RunHistory`]; on episode end, push the
///    episode's return and length and reset the environment.
/// 4. Let the reporter observe the history.
/// 5. Repeat from 2 until exactly `total_timesteps` interaction steps have
///    been driven.
/// 6. Save the agent's parameters in `model_dir` and log a final summary
///    sourced from the reporter.
///
/// # Interaction of objects
///
/// ```mermaid
/// graph LR
///     A[Agent]-->|Env::Act|B[Env]
///     B -->|Env::Obs|A
///     B -->|"Step&lt;E: Env&gt;"|C[RunHistory]
///     C -->|EpisodeStats|D[ProgressReporter]
/// ```
///
/// The environment is driven as a single instance; there is no vectorized
/// batching. A clean stop point exists only at the end of the step budget.
pub struct Trainer {
    /// The total number of interaction steps.
    total_timesteps: usize,

    /// Where to save the trained policy bundle.
    model_dir: Option<String>,
}

impl Trainer {
    /// Constructs a trainer.
    pub fn build(config: TrainerConfig) -> Self {
        Self {
            total_timesteps: config.total_timesteps,
            model_dir: config.model_dir,
        }
    }

    fn save_model<E: Env, A: Agent<E>>(agent: &A, model_dir: &str) -> Result<()> {
        agent.save_params(Path::new(model_dir))?;
        info!("Saved the policy bundle in {:?}", model_dir);
        Ok(())
    }

    /// Train the agent.
    ///
    /// Returns the run history accumulated over the whole run.
    pub fn train<E, A>(
        &mut self,
        mut env: E,
        agent: &mut A,
        reporter: &mut ProgressReporter,
    ) -> Result<RunHistory>
    where
        E: Env,
        A: Agent<E>,
    {
        let mut history = RunHistory::new();
        agent.train();

        if self.total_timesteps > 0 {
            let (mut obs, _) = env.reset(None)?;
            let mut ep_return = 0f32;
            let mut ep_len = 0usize;

            for _ in 0..self.total_timesteps {
                let act = agent.sample(&obs);
                let step = env.step(&act)?;
                ep_return += step.reward;
                ep_len += 1;
                let is_done = step.is_done();
                let next_obs = step.obs.clone();
                agent.observe(step);
                history.advance(1);

                if is_done {
                    history.push_episode(EpisodeStats {
                        ret: ep_return,
                        len: ep_len,
                    });
                    ep_return = 0f32;
                    ep_len = 0;
                    let (o, _) = env.reset(None)?;
                    obs = o;
                } else {
                    obs = next_obs;
                }

                reporter.observe(&history);
            }
        } else {
            info!("total_timesteps is zero, skipping interaction");
            reporter.observe(&history);
        }

        if let Some(model_dir) = self.model_dir.as_deref() {
            Self::save_model::<E, A>(agent, model_dir)?;
        }

        info!("Training complete after {} steps", history.total_steps());
        match reporter.mean_return() {
            Some(mean) => {
                info!("Total episodes: {}", reporter.episode_count());
                info!("Final mean return (last 100 eps): {:.2}", mean);
                if let Some(best) = reporter.best_return() {
                    info!("Best return: {:.2}", best);
                }
            }
            None => info!("No episodes completed"),
        }

        env.close();

        Ok(history)
    }
}
