#![warn(missing_docs)]
//! Core abstractions for driving a physics simulator as a reinforcement
//! learning environment.
//!
//! The crate defines the contracts at the two seams of the system: [`Env`],
//! the standard environment interface exposed to a policy optimizer, and
//! [`Agent`]/[`Policy`], the capability set expected from an (otherwise
//! opaque) learner. On top of those sit the drivers: [`Trainer`] runs the
//! interaction loop for a fixed step budget and [`DefaultEvaluator`] runs
//! deterministic rollouts of a trained policy.
pub mod dummy;
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Agent, Configurable, Env, Info, Obs, Policy, Step};

mod trainer;
pub use trainer::{Trainer, TrainerConfig};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
