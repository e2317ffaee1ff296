//! # chassis-law
//!
//! Force law abstraction for translational spring-damper connectors.
//!
//! ## Design
//!
//! The [`ForceLaw`] trait defines the callback a connector invokes once
//! per integration step to turn its instantaneous length and rate into an
//! axial force. Concrete laws (linear spring with end stops, degressive
//! asymmetric damper, plain linear variants) are separate implementors,
//! held by the solver as [`LawHandle`]s so law choice stays decoupled from
//! connector mechanics.
//!
//! Parameter structs in [`properties`] carry the calibrated values and
//! validate their invariants before any law is built.

pub mod damper;
pub mod properties;
pub mod spring;
pub mod stop_curves;
pub mod sweep;
pub mod traits;

pub use damper::{DegressiveDamper, LinearDamper};
pub use properties::{DamperParams, SpringParams};
pub use spring::{LinearSpring, SpringWithStops};
pub use traits::{ForceLaw, LawHandle};
