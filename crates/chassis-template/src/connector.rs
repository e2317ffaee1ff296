//! Translational spring-damper connector descriptions.
//!
//! What the topology needs to create one TSDA element: its two attachment
//! points, its rest length, and the force law it delegates to.

use std::fmt;

use serde::{Deserialize, Serialize};

use chassis_law::LawHandle;
use chassis_math::DVec3;
use chassis_types::{ChassisResult, Side};

/// Which suspension element a connector represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKind {
    Spring,
    Shock,
}

/// One TSDA between an axle-side point `A` and a chassis-side point `C`.
#[derive(Clone)]
pub struct Connector {
    pub kind: ConnectorKind,
    pub side: Side,
    /// Axle-side attachment.
    pub point_a: DVec3,
    /// Chassis-side attachment.
    pub point_c: DVec3,
    /// Free length passed to the law on every evaluation (m).
    pub rest_length: f64,
    law: LawHandle,
}

impl Connector {
    pub fn new(
        kind: ConnectorKind,
        side: Side,
        point_a: DVec3,
        point_c: DVec3,
        rest_length: f64,
        law: LawHandle,
    ) -> Self {
        Self {
            kind,
            side,
            point_a,
            point_c,
            rest_length,
            law,
        }
    }

    /// Length at the design configuration (m).
    pub fn design_length(&self) -> f64 {
        self.point_a.distance(self.point_c)
    }

    /// Unit vector from `A` toward `C`.
    pub fn axis(&self) -> DVec3 {
        (self.point_c - self.point_a).normalize_or_zero()
    }

    pub fn law(&self) -> &LawHandle {
        &self.law
    }

    /// Axial force at the given state. Unchecked; non-finite state is
    /// passed through to the law, see [`Connector::try_force`].
    #[inline]
    pub fn force(&self, time: f64, length: f64, vel: f64) -> f64 {
        self.law.evaluate(time, self.rest_length, length, vel)
    }

    /// Axial force, rejecting non-finite state.
    pub fn try_force(&self, time: f64, length: f64, vel: f64) -> ChassisResult<f64> {
        self.law.try_evaluate(time, self.rest_length, length, vel)
    }
}

impl fmt::Debug for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connector")
            .field("kind", &self.kind)
            .field("side", &self.side)
            .field("point_a", &self.point_a)
            .field("point_c", &self.point_c)
            .field("rest_length", &self.rest_length)
            .field("law", &self.law.name())
            .finish()
    }
}
