//! Physical constants and template defaults.

/// Tolerance for comparing lengths that should coincide (meters).
pub const LENGTH_EPSILON: f64 = 1.0e-12;

/// Minimum number of samples in a force curve.
pub const MIN_CURVE_SAMPLES: usize = 1;

/// Minimum number of samples in a spring stop curve. A single `(0, 0)`
/// sample would leave both stops without force.
pub const MIN_STOP_SAMPLES: usize = 2;

/// Default number of samples in a CLI force sweep.
pub const DEFAULT_SWEEP_STEPS: usize = 41;
