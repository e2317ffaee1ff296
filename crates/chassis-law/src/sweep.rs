//! Force-curve sweeps.
//!
//! Evaluates a law over a range of lengths or velocities, for plotting
//! characteristics and sanity-checking a calibration outside the solver.

use serde::{Deserialize, Serialize};

use chassis_types::{ChassisError, ChassisResult};

use crate::traits::ForceLaw;

/// One point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceSample {
    /// Connector length (m).
    pub length: f64,
    /// Connector rate (m/s).
    pub vel: f64,
    /// Axial force (N).
    pub force: f64,
}

impl ForceSample {
    pub fn to_csv_header() -> String {
        "length_m,vel_mps,force_n".to_string()
    }

    pub fn to_csv_row(&self) -> String {
        format!("{:.6},{:.6},{:.3}", self.length, self.vel, self.force)
    }

    /// Format a sweep as a complete CSV string.
    pub fn to_csv(samples: &[ForceSample]) -> String {
        let mut csv = Self::to_csv_header();
        for s in samples {
            csv.push('\n');
            csv.push_str(&s.to_csv_row());
        }
        csv
    }
}

/// `steps` evenly spaced values from `from` to `to`, inclusive.
fn linspace(from: f64, to: f64, steps: usize) -> ChassisResult<impl Iterator<Item = f64>> {
    if steps < 2 {
        return Err(ChassisError::InvalidConfig(format!(
            "Sweep needs at least 2 steps, got {steps}"
        )));
    }
    if !from.is_finite() || !to.is_finite() {
        return Err(ChassisError::InvalidConfig(format!(
            "Sweep bounds must be finite, got [{from}, {to}]"
        )));
    }
    let span = to - from;
    let last = (steps - 1) as f64;
    Ok((0..steps).map(move |i| from + span * i as f64 / last))
}

/// Sweeps connector length at zero velocity.
pub fn sweep_length(
    law: &dyn ForceLaw,
    rest_length: f64,
    from: f64,
    to: f64,
    steps: usize,
) -> ChassisResult<Vec<ForceSample>> {
    linspace(from, to, steps)?
        .map(|length| -> ChassisResult<ForceSample> {
            let force = law.try_evaluate(0.0, rest_length, length, 0.0)?;
            Ok(ForceSample {
                length,
                vel: 0.0,
                force,
            })
        })
        .collect()
}

/// Sweeps connector velocity at a fixed length.
pub fn sweep_velocity(
    law: &dyn ForceLaw,
    rest_length: f64,
    length: f64,
    from: f64,
    to: f64,
    steps: usize,
) -> ChassisResult<Vec<ForceSample>> {
    linspace(from, to, steps)?
        .map(|vel| -> ChassisResult<ForceSample> {
            let force = law.try_evaluate(0.0, rest_length, length, vel)?;
            Ok(ForceSample { length, vel, force })
        })
        .collect()
}
