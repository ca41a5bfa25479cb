//! Action of the beam-and-ball environment.
use crate::BeamEnvError;
use fulcrum_core::Act;

/// Torque applied to the beam.
///
/// Policies may emit either a bare scalar (via `From<f32>`) or a length-1
/// vector (the shape a batched optimizer typically produces). Anything else
/// is malformed and rejected by the [`ActFilter`]; the adapter only knows how
/// to extract a single scalar and must not silently discard data.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamAct(Vec<f32>);

impl BeamAct {
    /// Constructs an action from a single torque value.
    pub fn new(torque: f32) -> Self {
        Self(vec![torque])
    }

    /// Constructs an action from a vector, deferring shape validation to the
    /// [`ActFilter`].
    pub fn from_vec(v: Vec<f32>) -> Self {
        Self(v)
    }

    /// The torque value, if the action holds exactly one element.
    pub fn as_scalar(&self) -> Option<f32> {
        match self.0.len() {
            1 => Some(self.0[0]),
            _ => None,
        }
    }
}

impl Act for BeamAct {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<f32> for BeamAct {
    fn from(torque: f32) -> Self {
        Self::new(torque)
    }
}

/// Coerces an action to a single torque and clamps it to the actuation range.
#[derive(Clone, Debug)]
pub struct ActFilter {
    min: f32,
    max: f32,
}

impl Default for ActFilter {
    fn default() -> Self {
        Self {
            min: -1.0,
            max: 1.0,
        }
    }
}

impl ActFilter {
    /// Extracts the torque from an action and clamps it to `[min, max]`.
    ///
    /// Out-of-range torques are clamped rather than rejected; malformed
    /// shapes are rejected loudly.
    pub fn filt(&self, act: &BeamAct) -> Result<f32, BeamEnvError> {
        let torque = act
            .as_scalar()
            .ok_or_else(|| BeamEnvError::MalformedAction(act.0.len()))?;
        Ok(torque.clamp(self.min, self.max))
    }
}
