//! Calibrated end-stop curves.
//!
//! Penetration (m) → force (N) tables for mechanical bump and rebound
//! stops. Both stops of a spring share the same curve.

use chassis_math::PiecewiseLinear;
use chassis_types::ChassisResult;

/// Progressive elastomer stop sampled every 2 mm up to 10 mm, then every
/// 10 mm up to 50 mm. From an ADAMS/Car bus front axle data set.
pub const ADAMS_PROGRESSIVE: [(f64, f64); 10] = [
    (0.0, 0.0),
    (2.0e-3, 200.0),
    (4.0e-3, 400.0),
    (6.0e-3, 600.0),
    (8.0e-3, 800.0),
    (10.0e-3, 1000.0),
    (20.0e-3, 2500.0),
    (30.0e-3, 4500.0),
    (40.0e-3, 7500.0),
    (50.0e-3, 12500.0),
];

/// Builds the [`ADAMS_PROGRESSIVE`] curve.
pub fn adams_progressive() -> ChassisResult<PiecewiseLinear> {
    PiecewiseLinear::new(ADAMS_PROGRESSIVE.to_vec())
}
