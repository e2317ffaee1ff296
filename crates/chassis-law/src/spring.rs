//! Spring force laws.
//!
//! [`SpringWithStops`] is a linear coil/leaf rate plus two progressive
//! end stops that engage only outside the designed travel:
//!
//! ```text
//! F = (L0 - L)·k + S(L_min - L)  when L < L_min
//!   = (L0 - L)·k                 when L_min <= L <= L_max
//!   = (L0 - L)·k - S(L - L_max)  when L > L_max
//! ```
//!
//! where `S` is the stop curve, shared by bump and rebound.

use chassis_math::PiecewiseLinear;
use chassis_types::constants::MIN_STOP_SAMPLES;
use chassis_types::{ChassisError, ChassisResult};

use crate::properties::SpringParams;
use crate::traits::ForceLaw;

/// Linear spring with bump and rebound stops.
///
/// Position-only: `time` and `vel` are accepted and ignored. The linear
/// term uses the rest length supplied by the connector on each call.
#[derive(Debug, Clone)]
pub struct SpringWithStops {
    stiffness: f64,
    min_length: f64,
    max_length: f64,
    stop: PiecewiseLinear,
}

impl SpringWithStops {
    /// Builds the law from validated parameters and a stop curve.
    ///
    /// The stop curve must pass through the origin and never decrease,
    /// so force is continuous when a stop engages and grows with
    /// penetration.
    pub fn new(params: &SpringParams, stop: PiecewiseLinear) -> ChassisResult<Self> {
        params.validate()?;
        Self::check_stop_curve(&stop)?;

        tracing::trace!(
            stiffness = params.stiffness,
            min_length = params.min_length,
            max_length = params.max_length,
            stop_samples = stop.len(),
            "spring law built"
        );

        Ok(Self {
            stiffness: params.stiffness,
            min_length: params.min_length,
            max_length: params.max_length,
            stop,
        })
    }

    /// Checks that `stop` is usable as a stop curve: at least
    /// [`MIN_STOP_SAMPLES`] samples, first sample at the origin, force
    /// non-decreasing in penetration.
    pub fn check_stop_curve(stop: &PiecewiseLinear) -> ChassisResult<()> {
        if stop.len() < MIN_STOP_SAMPLES {
            return Err(ChassisError::InvalidCurve(format!(
                "Stop curve needs at least {MIN_STOP_SAMPLES} samples, got {}",
                stop.len()
            )));
        }
        if stop.points()[0] != (0.0, 0.0) {
            return Err(ChassisError::InvalidCurve(format!(
                "Stop curve must start at (0, 0), got {:?}",
                stop.points()[0]
            )));
        }
        if !stop.is_non_decreasing() {
            return Err(ChassisError::InvalidCurve(
                "Stop curve force must be non-decreasing in penetration".into(),
            ));
        }
        Ok(())
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    pub fn min_length(&self) -> f64 {
        self.min_length
    }

    pub fn max_length(&self) -> f64 {
        self.max_length
    }

    pub fn stop_curve(&self) -> &PiecewiseLinear {
        &self.stop
    }

    /// Stop force for a given penetration past either limit.
    #[inline]
    pub fn stop_force(&self, penetration: f64) -> f64 {
        self.stop.eval(penetration)
    }
}

impl ForceLaw for SpringWithStops {
    #[inline]
    fn evaluate(&self, _time: f64, rest_length: f64, length: f64, _vel: f64) -> f64 {
        let mut force = (rest_length - length) * self.stiffness;

        if length < self.min_length {
            force += self.stop_force(self.min_length - length);
        } else if length > self.max_length {
            force -= self.stop_force(length - self.max_length);
        }

        force
    }

    fn name(&self) -> &str {
        "spring_with_stops"
    }
}

/// Plain linear spring, `F = (L0 - L)·k`.
#[derive(Debug, Clone, Copy)]
pub struct LinearSpring {
    stiffness: f64,
}

impl LinearSpring {
    pub fn new(stiffness: f64) -> ChassisResult<Self> {
        if !stiffness.is_finite() || stiffness < 0.0 {
            return Err(ChassisError::InvalidLaw(format!(
                "Spring stiffness must be finite and non-negative, got {stiffness}"
            )));
        }
        Ok(Self { stiffness })
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }
}

impl ForceLaw for LinearSpring {
    #[inline]
    fn evaluate(&self, _time: f64, rest_length: f64, length: f64, _vel: f64) -> f64 {
        (rest_length - length) * self.stiffness
    }

    fn name(&self) -> &str {
        "linear_spring"
    }
}
