//! Calibrated spring and damper parameters.
//!
//! These are the numeric values a vehicle template publishes for its
//! suspension connectors. Each struct validates its own invariants so a
//! malformed table is caught before any law object exists.

use serde::{Deserialize, Serialize};

use chassis_types::{ChassisError, ChassisResult};

/// Parameters of a linear spring with bump and rebound stops.
///
/// | Field | Meaning |
/// |---|---|
/// | `stiffness` | Linear rate (N/m) |
/// | `rest_length` | Free length of the spring (m) |
/// | `min_length` | Length below which the bump stop engages (m) |
/// | `max_length` | Length above which the rebound stop engages (m) |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    pub stiffness: f64,
    pub rest_length: f64,
    pub min_length: f64,
    pub max_length: f64,
}

impl SpringParams {
    /// Derives parameters from a design length and offsets, the way
    /// vehicle data sheets quote them.
    pub fn from_design(
        stiffness: f64,
        design_length: f64,
        rest_offset: f64,
        min_offset: f64,
        max_offset: f64,
    ) -> Self {
        Self {
            stiffness,
            rest_length: design_length + rest_offset,
            min_length: design_length - min_offset,
            max_length: design_length + max_offset,
        }
    }

    /// Checks `min_length < rest_length < max_length`, finiteness, and
    /// non-negative stiffness.
    pub fn validate(&self) -> ChassisResult<()> {
        for (label, value) in [
            ("stiffness", self.stiffness),
            ("rest_length", self.rest_length),
            ("min_length", self.min_length),
            ("max_length", self.max_length),
        ] {
            if !value.is_finite() {
                return Err(ChassisError::InvalidLaw(format!(
                    "Spring {label} must be finite, got {value}"
                )));
            }
        }
        if self.stiffness < 0.0 {
            return Err(ChassisError::InvalidLaw(format!(
                "Spring stiffness must be non-negative, got {}",
                self.stiffness
            )));
        }
        if self.min_length <= 0.0 {
            return Err(ChassisError::InvalidLaw(format!(
                "Spring min_length must be positive, got {}",
                self.min_length
            )));
        }
        if !(self.min_length < self.rest_length && self.rest_length < self.max_length) {
            return Err(ChassisError::InvalidLaw(format!(
                "Spring lengths must satisfy min < rest < max, got {} / {} / {}",
                self.min_length, self.rest_length, self.max_length
            )));
        }
        Ok(())
    }

    /// Usable travel between the two stops (m).
    pub fn travel(&self) -> f64 {
        self.max_length - self.min_length
    }
}

/// Parameters of an asymmetric degressive damper.
///
/// Slopes are the low-speed damping rates (N·s/m); degressivity (s/m)
/// controls how quickly the effective rate falls off with speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamperParams {
    pub compression_slope: f64,
    pub compression_degressivity: f64,
    pub expansion_slope: f64,
    pub expansion_degressivity: f64,
}

impl DamperParams {
    /// Same slope both ways, independent degressivity per direction.
    pub fn symmetric_slope(slope: f64, compression_degressivity: f64, expansion_degressivity: f64) -> Self {
        Self {
            compression_slope: slope,
            compression_degressivity,
            expansion_slope: slope,
            expansion_degressivity,
        }
    }

    /// All coefficients must be finite and non-negative.
    pub fn validate(&self) -> ChassisResult<()> {
        for (label, value) in [
            ("compression_slope", self.compression_slope),
            ("compression_degressivity", self.compression_degressivity),
            ("expansion_slope", self.expansion_slope),
            ("expansion_degressivity", self.expansion_degressivity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChassisError::InvalidLaw(format!(
                    "Damper {label} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
