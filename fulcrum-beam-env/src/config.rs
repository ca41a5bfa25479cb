//! Configuration of [`BeamEnv`](crate::BeamEnv).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

/// Hard ceiling on episode length, in steps, independent of physics.
pub(crate) const MAX_EPISODE_STEPS: usize = 2000;

/// Default simulation time step, also the frame interval when rendering.
pub(crate) const DEFAULT_DT: f64 = 1.0 / 60.0;

/// Configuration of [`BeamEnv`](crate::BeamEnv).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BeamEnvConfig {
    /// Path of the scene description consumed by the simulator.
    pub scene_path: PathBuf,

    /// Simulation time step.
    pub dt: f64,

    /// If `true`, the simulator runs without a display and `render` is a
    /// no-op.
    pub headless: bool,

    /// If `true`, every reset reconstructs the simulator with a fresh seed
    /// drawn from the environment's internal random source.
    pub random_init: bool,

    /// Maximum number of steps per episode before truncation.
    pub max_steps: usize,
}

impl Default for BeamEnvConfig {
    fn default() -> Self {
        Self {
            scene_path: PathBuf::new(),
            dt: DEFAULT_DT,
            headless: true,
            random_init: true,
            max_steps: MAX_EPISODE_STEPS,
        }
    }
}

impl BeamEnvConfig {
    /// Sets the scene path.
    pub fn scene_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scene_path = path.into();
        self
    }

    /// Sets the simulation time step.
    pub fn dt(mut self, v: f64) -> Self {
        self.dt = v;
        self
    }

    /// Sets headless mode.
    pub fn headless(mut self, v: bool) -> Self {
        self.headless = v;
        self
    }

    /// Sets per-episode randomization.
    pub fn random_init(mut self, v: bool) -> Self {
        self.random_init = v;
        self
    }

    /// Sets the step ceiling.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Constructs [`BeamEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves [`BeamEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_default_matches_training_setup() {
        let config = BeamEnvConfig::default();
        assert!(config.headless);
        assert!(config.random_init);
        assert_eq!(config.max_steps, 2000);
        assert!((config.dt - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_yaml_roundtrip() -> Result<()> {
        let config = BeamEnvConfig::default()
            .scene_path("scenes/fulcrum.json")
            .random_init(false)
            .headless(false);

        let dir = TempDir::new("beam_env_config")?;
        let path = dir.path().join("env.yaml");
        config.save(&path)?;
        let config_ = BeamEnvConfig::load(&path)?;

        assert_eq!(config_.scene_path, PathBuf::from("scenes/fulcrum.json"));
        assert!(!config_.random_init);
        assert!(!config_.headless);
        Ok(())
    }
}
