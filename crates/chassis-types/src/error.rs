//! Error types for the Chassis crates.
//!
//! All crates return `ChassisResult<T>` from fallible operations.
//! Configuration problems surface at construction time; the force
//! laws themselves are total and never fail on finite input.

use thiserror::Error;

/// Unified error type for the Chassis crates.
#[derive(Debug, Error)]
pub enum ChassisError {
    /// Curve samples are malformed (non-increasing x, non-finite values).
    #[error("Invalid curve: {0}")]
    InvalidCurve(String),

    /// Force law parameter violates its invariants.
    #[error("Invalid force law parameter: {0}")]
    InvalidLaw(String),

    /// Template configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A hardpoint role was requested that this template variant does not define.
    #[error("Hardpoint '{role}' is not defined by template '{template}'")]
    UnsupportedHardpoint {
        role: String,
        template: String,
    },

    /// A hardpoint required by the topology is absent from the table.
    #[error("Template '{template}' is missing required hardpoint '{role}'")]
    MissingHardpoint {
        role: String,
        template: String,
    },

    /// A NaN or infinite value reached a force law boundary.
    #[error("Non-finite {quantity}: {value}")]
    NonFiniteInput {
        quantity: &'static str,
        value: f64,
    },

    /// No preset is registered under the requested name.
    #[error("Unknown preset: '{0}'")]
    UnknownPreset(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, ChassisError>`.
pub type ChassisResult<T> = Result<T, ChassisError>;

/// Rejects NaN and infinities with a labelled error.
#[inline]
pub fn ensure_finite(quantity: &'static str, value: f64) -> ChassisResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChassisError::NonFiniteInput { quantity, value })
    }
}
