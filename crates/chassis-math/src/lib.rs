//! # chassis-math
//!
//! Numeric primitives for the Chassis suspension crates.
//!
//! Provides:
//! - Re-export of the `glam` double-precision vector (`DVec3`)
//! - Piecewise-linear lookup curves with saturation outside the sampled domain

pub mod curve;

// Re-export glam types as the canonical math types for Chassis.
pub use glam::DVec3;

pub use curve::PiecewiseLinear;
