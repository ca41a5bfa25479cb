//! Policy inference without a deep learning backend.
//!
//! A trained policy is persisted as a serialized [`Mlp`]; this crate can load
//! such a bundle and run the deterministic forward pass with nothing but
//! plain vectors, which makes held-out evaluation independent of the
//! optimizer's backend. The crate also defines [`PpoConfig`], the
//! hyperparameter set the training driver hands to the external policy
//! optimizer; the optimization algorithm itself lives outside this
//! workspace.
mod mat;
mod mlp;
mod policy;
mod ppo;

pub use mat::Mat;
pub use mlp::Mlp;
pub use policy::MlpPolicy;
pub use ppo::PpoConfig;
