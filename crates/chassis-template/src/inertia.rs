//! Mass and inertia table.
//!
//! Per-body mass, principal moments of inertia, and the visualization
//! radius the topology uses for its cylinder/sphere shapes. Constant for
//! the life of a template instance.

use serde::{Deserialize, Serialize};

use chassis_types::{ChassisError, ChassisResult};

/// Rigid bodies of the toe-bar leafspring axle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    AxleTube,
    Spindle,
    Knuckle,
    Tierod,
    Draglink,
}

impl BodyKind {
    pub const ALL: [BodyKind; 5] = [
        BodyKind::AxleTube,
        BodyKind::Spindle,
        BodyKind::Knuckle,
        BodyKind::Tierod,
        BodyKind::Draglink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BodyKind::AxleTube => "axle_tube",
            BodyKind::Spindle => "spindle",
            BodyKind::Knuckle => "knuckle",
            BodyKind::Tierod => "tierod",
            BodyKind::Draglink => "draglink",
        }
    }
}

/// Mass properties of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProperties {
    /// Mass (kg).
    pub mass: f64,
    /// Principal moments of inertia `[Ixx, Iyy, Izz]` (kg·m²).
    pub inertia: [f64; 3],
    /// Visualization radius (m).
    pub radius: f64,
}

impl BodyProperties {
    fn validate(&self, body: BodyKind) -> ChassisResult<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ChassisError::InvalidConfig(format!(
                "{} mass must be positive, got {}",
                body.name(),
                self.mass
            )));
        }
        if self.inertia.iter().any(|i| !i.is_finite() || *i < 0.0) {
            return Err(ChassisError::InvalidConfig(format!(
                "{} inertia must be finite and non-negative, got {:?}",
                body.name(),
                self.inertia
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChassisError::InvalidConfig(format!(
                "{} radius must be positive, got {}",
                body.name(),
                self.radius
            )));
        }
        Ok(())
    }
}

/// All body mass properties of one template, plus the scalar extras the
/// topology needs (spindle width, axle shaft inertia).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassTable {
    /// Spindle cylinder width (m).
    pub spindle_width: f64,
    /// Rotational inertia of each axle shaft (kg·m²).
    pub axle_shaft_inertia: f64,
    pub axle_tube: BodyProperties,
    pub spindle: BodyProperties,
    pub knuckle: BodyProperties,
    pub tierod: BodyProperties,
    pub draglink: BodyProperties,
}

impl MassTable {
    pub fn get(&self, body: BodyKind) -> &BodyProperties {
        match body {
            BodyKind::AxleTube => &self.axle_tube,
            BodyKind::Spindle => &self.spindle,
            BodyKind::Knuckle => &self.knuckle,
            BodyKind::Tierod => &self.tierod,
            BodyKind::Draglink => &self.draglink,
        }
    }

    /// Unsprung mass of the whole axle: one axle tube, and a spindle,
    /// knuckle per side, one tie rod and one drag link.
    pub fn total_mass(&self) -> f64 {
        self.axle_tube.mass
            + 2.0 * (self.spindle.mass + self.knuckle.mass)
            + self.tierod.mass
            + self.draglink.mass
    }

    pub fn validate(&self) -> ChassisResult<()> {
        for body in BodyKind::ALL {
            self.get(body).validate(body)?;
        }
        if !self.spindle_width.is_finite() || self.spindle_width <= 0.0 {
            return Err(ChassisError::InvalidConfig(format!(
                "Spindle width must be positive, got {}",
                self.spindle_width
            )));
        }
        if !self.axle_shaft_inertia.is_finite() || self.axle_shaft_inertia < 0.0 {
            return Err(ChassisError::InvalidConfig(format!(
                "Axle shaft inertia must be non-negative, got {}",
                self.axle_shaft_inertia
            )));
        }
        Ok(())
    }
}
