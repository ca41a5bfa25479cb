use crate::{Mat, Mlp};
use anyhow::Result;
use fulcrum_core::{Env, Policy};
use log::info;
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    marker::PhantomData,
    path::Path,
};

/// A deterministic policy backed by a plain [`Mlp`] forward pass.
///
/// Loads the policy bundle persisted at the end of training and maps
/// observations to actions without any deep learning backend. The mapping is
/// the network's mode, with no sampling, which is what held-out evaluation
/// calls for.
pub struct MlpPolicy<E> {
    mlp: Mlp,
    phantom: PhantomData<E>,
}

impl<E> MlpPolicy<E> {
    /// Wraps a network as a policy.
    pub fn new(mlp: Mlp) -> Self {
        Self {
            mlp,
            phantom: PhantomData,
        }
    }

    /// Loads a policy bundle.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mlp = bincode::deserialize_from(BufReader::new(file))?;
        info!("Loaded policy bundle from {:?}", path.as_ref());
        Ok(Self::new(mlp))
    }

    /// Saves the policy bundle.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        bincode::serialize_into(BufWriter::new(file), &self.mlp)?;
        Ok(())
    }
}

impl<E: Env> Policy<E> for MlpPolicy<E>
where
    E::Obs: AsRef<[f32]>,
    E::Act: From<f32>,
{
    fn sample(&mut self, obs: &E::Obs) -> E::Act {
        let x = Mat::column(obs.as_ref());
        let y = self.mlp.forward(&x);
        E::Act::from(y.data[0])
    }
}
