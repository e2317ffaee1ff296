//! Piecewise-linear lookup curve.
//!
//! An ordered table of `(x, y)` samples evaluated by linear interpolation
//! between the two bracketing samples. Outside the sampled domain the
//! curve saturates at the nearest end value, so evaluation is total.
//!
//! Evaluation is a binary search plus one lerp: no allocation, safe to
//! call from a solver's force loop.

use serde::{Deserialize, Serialize};

use chassis_types::{ChassisError, ChassisResult};

/// Immutable piecewise-linear curve with strictly increasing abscissae.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct PiecewiseLinear {
    points: Vec<(f64, f64)>,
}

impl PiecewiseLinear {
    /// Builds a curve from samples.
    ///
    /// Fails if the table is empty, contains NaN/∞, or if `x` is not
    /// strictly increasing.
    pub fn new(points: Vec<(f64, f64)>) -> ChassisResult<Self> {
        if points.len() < chassis_types::constants::MIN_CURVE_SAMPLES {
            return Err(ChassisError::InvalidCurve(
                "Curve needs at least one sample".into(),
            ));
        }

        for (i, &(x, y)) in points.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(ChassisError::InvalidCurve(format!(
                    "Sample {i} is not finite: ({x}, {y})"
                )));
            }
        }

        if let Some(i) = points.windows(2).position(|w| w[1].0 <= w[0].0) {
            return Err(ChassisError::InvalidCurve(format!(
                "x samples must be strictly increasing: x[{}] = {} >= x[{}] = {}",
                i,
                points[i].0,
                i + 1,
                points[i + 1].0
            )));
        }

        Ok(Self { points })
    }

    /// Evaluates the curve at `x`.
    ///
    /// Exact sample hits return the stored `y` unchanged. NaN input
    /// saturates to the first sample.
    pub fn eval(&self, x: f64) -> f64 {
        // Number of samples with abscissa <= x. NaN compares false everywhere → 0.
        let i = self.points.partition_point(|&(px, _)| px <= x);

        if i == 0 {
            return self.points[0].1;
        }
        if i == self.points.len() {
            return self.points[i - 1].1;
        }

        let (x0, y0) = self.points[i - 1];
        let (x1, y1) = self.points[i];
        if x == x0 {
            return y0;
        }
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }

    /// Returns the samples in ascending `x` order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed curve; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `(x_min, x_max)` of the sampled domain.
    pub fn domain(&self) -> (f64, f64) {
        let first = self.points[0].0;
        let last = self.points[self.points.len() - 1].0;
        (first, last)
    }

    /// True if `y` never decreases along the table.
    pub fn is_non_decreasing(&self) -> bool {
        self.points.windows(2).all(|w| w[1].1 >= w[0].1)
    }
}

impl TryFrom<Vec<(f64, f64)>> for PiecewiseLinear {
    type Error = ChassisError;

    fn try_from(points: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<PiecewiseLinear> for Vec<(f64, f64)> {
    fn from(curve: PiecewiseLinear) -> Self {
        curve.points
    }
}
