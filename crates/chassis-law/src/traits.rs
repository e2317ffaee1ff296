//! Force law trait — the core connector callback abstraction.
//!
//! Every spring or damper characteristic implements this trait, enabling
//! the solver to evaluate any law through one uniform signature.

use std::sync::Arc;

use chassis_types::error::ensure_finite;
use chassis_types::ChassisResult;

/// Trait for connector force laws.
///
/// The solver calls `evaluate()` once per connector per step. All four
/// arguments are always supplied, even when a law ignores some of them,
/// so that laws stay interchangeable behind a [`LawHandle`].
///
/// Sign convention: positive force pushes the attachment points apart.
///
/// # Implementations
///
/// - [`SpringWithStops`](crate::spring::SpringWithStops) — linear spring plus bump/rebound stops
/// - [`LinearSpring`](crate::spring::LinearSpring) — linear spring, no stops
/// - [`DegressiveDamper`](crate::damper::DegressiveDamper) — asymmetric degressive damper
/// - [`LinearDamper`](crate::damper::LinearDamper) — viscous damper
pub trait ForceLaw: Send + Sync {
    /// Compute the axial force.
    ///
    /// # Arguments
    /// - `time` — Current simulation time (s)
    /// - `rest_length` — Free length configured on the connector (m)
    /// - `length` — Current distance between attachment points (m)
    /// - `vel` — Rate of change of `length` (m/s), positive in extension
    ///
    /// Total over finite input; never allocates.
    fn evaluate(&self, time: f64, rest_length: f64, length: f64, vel: f64) -> f64;

    /// Like [`evaluate`](Self::evaluate), but rejects NaN/∞ arguments and
    /// results instead of handing them to the solver.
    fn try_evaluate(
        &self,
        time: f64,
        rest_length: f64,
        length: f64,
        vel: f64,
    ) -> ChassisResult<f64> {
        let checked = (|| -> ChassisResult<f64> {
            ensure_finite("time", time)?;
            ensure_finite("rest_length", rest_length)?;
            ensure_finite("length", length)?;
            ensure_finite("vel", vel)?;
            ensure_finite("force", self.evaluate(time, rest_length, length, vel))
        })();

        checked.inspect_err(|e| {
            tracing::warn!(law = self.name(), error = %e, "rejected force evaluation");
        })
    }

    /// Returns the name of this force law.
    fn name(&self) -> &str;
}

/// Shared, owning handle to a force law.
///
/// Laws are immutable, so one handle can be cloned onto any number of
/// connectors and evaluated from any thread.
pub type LawHandle = Arc<dyn ForceLaw>;
