//! Damper force laws.
//!
//! [`DegressiveDamper`] models a shock absorber whose effective rate
//! softens with speed, tuned separately for compression and expansion:
//!
//! ```text
//! F = -c_e / (1 + d_e·|v|) · v   for v >= 0 (expansion)
//! F = -c_c / (1 + d_c·|v|) · v   for v <  0 (compression)
//! ```
//!
//! Both branches vanish at `v = 0`, so the law is continuous there.

use chassis_types::{ChassisError, ChassisResult};

use crate::properties::DamperParams;
use crate::traits::ForceLaw;

/// Asymmetric degressive damper. Velocity-only.
#[derive(Debug, Clone, Copy)]
pub struct DegressiveDamper {
    params: DamperParams,
}

impl DegressiveDamper {
    pub fn new(params: DamperParams) -> ChassisResult<Self> {
        params.validate()?;
        tracing::trace!(?params, "damper law built");
        Ok(Self { params })
    }

    pub fn params(&self) -> &DamperParams {
        &self.params
    }
}

impl ForceLaw for DegressiveDamper {
    #[inline]
    fn evaluate(&self, _time: f64, _rest_length: f64, _length: f64, vel: f64) -> f64 {
        let (slope, degressivity) = if vel >= 0.0 {
            (self.params.expansion_slope, self.params.expansion_degressivity)
        } else {
            (self.params.compression_slope, self.params.compression_degressivity)
        };

        -slope / (1.0 + degressivity * vel.abs()) * vel
    }

    fn name(&self) -> &str {
        "degressive_damper"
    }
}

/// Viscous damper, `F = -c·v`.
#[derive(Debug, Clone, Copy)]
pub struct LinearDamper {
    coefficient: f64,
}

impl LinearDamper {
    pub fn new(coefficient: f64) -> ChassisResult<Self> {
        if !coefficient.is_finite() || coefficient < 0.0 {
            return Err(ChassisError::InvalidLaw(format!(
                "Damping coefficient must be finite and non-negative, got {coefficient}"
            )));
        }
        Ok(Self { coefficient })
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

impl ForceLaw for LinearDamper {
    #[inline]
    fn evaluate(&self, _time: f64, _rest_length: f64, _length: f64, vel: f64) -> f64 {
        -self.coefficient * vel
    }

    fn name(&self) -> &str {
        "linear_damper"
    }
}
