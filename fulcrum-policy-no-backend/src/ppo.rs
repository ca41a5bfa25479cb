//! Configuration of the external PPO optimizer.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Hyperparameters handed to the external PPO optimizer.
///
/// These are configuration values only; the optimization algorithm consuming
/// them is an external collaborator. The defaults are the set used to train
/// the balancing policy.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct PpoConfig {
    /// Learning rate.
    pub learning_rate: f64,

    /// Number of interaction steps collected per rollout.
    pub n_steps: usize,

    /// Minibatch size.
    pub batch_size: usize,

    /// Number of optimization epochs per rollout.
    pub n_epochs: usize,

    /// Discount factor.
    pub gamma: f64,

    /// Advantage-estimation smoothing factor (GAE lambda).
    pub gae_lambda: f64,

    /// Policy clip range.
    pub clip_range: f64,

    /// Entropy bonus coefficient.
    pub ent_coef: f64,

    /// Value-loss coefficient.
    pub vf_coef: f64,

    /// Gradient-norm clip.
    pub max_grad_norm: f64,

    /// Hidden layer widths of the policy/value networks.
    pub net_arch: Vec<usize>,
}

impl Default for PpoConfig {
    fn default() -> Self {
        Self {
            learning_rate: 3e-4,
            n_steps: 2048,
            batch_size: 64,
            n_epochs: 10,
            gamma: 0.99,
            gae_lambda: 0.95,
            clip_range: 0.2,
            ent_coef: 0.01,
            vf_coef: 0.5,
            max_grad_norm: 0.5,
            net_arch: vec![128, 128],
        }
    }
}

impl PpoConfig {
    /// Sets the learning rate.
    pub fn learning_rate(mut self, v: f64) -> Self {
        self.learning_rate = v;
        self
    }

    /// Sets the rollout horizon.
    pub fn n_steps(mut self, v: usize) -> Self {
        self.n_steps = v;
        self
    }

    /// Sets the minibatch size.
    pub fn batch_size(mut self, v: usize) -> Self {
        self.batch_size = v;
        self
    }

    /// Sets the number of optimization epochs per rollout.
    pub fn n_epochs(mut self, v: usize) -> Self {
        self.n_epochs = v;
        self
    }

    /// Sets the discount factor.
    pub fn discount_factor(mut self, v: f64) -> Self {
        self.gamma = v;
        self
    }

    /// Sets the advantage-estimation smoothing factor.
    pub fn gae_lambda(mut self, v: f64) -> Self {
        self.gae_lambda = v;
        self
    }

    /// Sets the policy clip range.
    pub fn clip_range(mut self, v: f64) -> Self {
        self.clip_range = v;
        self
    }

    /// Sets the entropy bonus coefficient.
    pub fn ent_coef(mut self, v: f64) -> Self {
        self.ent_coef = v;
        self
    }

    /// Sets the value-loss coefficient.
    pub fn vf_coef(mut self, v: f64) -> Self {
        self.vf_coef = v;
        self
    }

    /// Sets the gradient-norm clip.
    pub fn max_grad_norm(mut self, v: f64) -> Self {
        self.max_grad_norm = v;
        self
    }

    /// Sets the hidden layer widths.
    pub fn net_arch(mut self, v: Vec<usize>) -> Self {
        self.net_arch = v;
        self
    }

    /// Constructs [`PpoConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves [`PpoConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
