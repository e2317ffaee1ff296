//! Hardpoint registry.
//!
//! Maps each geometric role of a toe-bar leafspring axle to a point in
//! the suspension reference frame (X forward, Y left, Z up). Points are
//! authored for the left half; the right half mirrors Y.
//!
//! The table is a fixed array indexed by role, built once. A role the
//! variant does not define is an error, never a silent origin.

use serde::{Deserialize, Serialize};

use chassis_math::DVec3;
use chassis_types::{ChassisError, ChassisResult, Side};

/// Named attachment point of the toe-bar leafspring axle family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardpointRole {
    /// Spring, axle side.
    SpringA,
    /// Spring, chassis side.
    SpringC,
    /// Shock, axle side.
    ShockA,
    /// Shock, chassis side.
    ShockC,
    /// Spindle center.
    Spindle,
    /// Knuckle center of mass.
    KnuckleCm,
    /// Lower knuckle/kingpin joint.
    KnuckleL,
    /// Upper knuckle/kingpin joint.
    KnuckleU,
    /// Knuckle end of the drag link.
    KnuckleDrl,
    /// Knuckle end of the tie rod.
    TierodK,
    /// Chassis end of the drag link.
    DraglinkC,
}

impl HardpointRole {
    pub const COUNT: usize = 11;

    pub const ALL: [HardpointRole; Self::COUNT] = [
        HardpointRole::SpringA,
        HardpointRole::SpringC,
        HardpointRole::ShockA,
        HardpointRole::ShockC,
        HardpointRole::Spindle,
        HardpointRole::KnuckleCm,
        HardpointRole::KnuckleL,
        HardpointRole::KnuckleU,
        HardpointRole::KnuckleDrl,
        HardpointRole::TierodK,
        HardpointRole::DraglinkC,
    ];

    /// Slot of this role in a [`HardpointTable`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            HardpointRole::SpringA => "spring_a",
            HardpointRole::SpringC => "spring_c",
            HardpointRole::ShockA => "shock_a",
            HardpointRole::ShockC => "shock_c",
            HardpointRole::Spindle => "spindle",
            HardpointRole::KnuckleCm => "knuckle_cm",
            HardpointRole::KnuckleL => "knuckle_l",
            HardpointRole::KnuckleU => "knuckle_u",
            HardpointRole::KnuckleDrl => "knuckle_drl",
            HardpointRole::TierodK => "tierod_k",
            HardpointRole::DraglinkC => "draglink_c",
        }
    }
}

impl std::fmt::Display for HardpointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for HardpointRole {
    type Err = ChassisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HardpointRole::ALL
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or_else(|| ChassisError::InvalidConfig(format!("Unknown hardpoint role '{s}'")))
    }
}

/// Roles the toe-bar leafspring axle topology needs to build its bodies,
/// joints, and connectors.
pub const TOE_BAR_LEAFSPRING_ROLES: &[HardpointRole] = &HardpointRole::ALL;

/// One `(role, point)` row as stored in a template config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardpointEntry {
    pub role: HardpointRole,
    pub point: [f64; 3],
}

/// Immutable role → point table for one template variant.
#[derive(Debug, Clone, PartialEq)]
pub struct HardpointTable {
    template: String,
    points: [Option<DVec3>; HardpointRole::COUNT],
}

impl HardpointTable {
    /// Builds a table from config rows.
    ///
    /// Rejects duplicate roles and non-finite coordinates.
    pub fn from_entries(template: &str, entries: &[HardpointEntry]) -> ChassisResult<Self> {
        let mut points = [None; HardpointRole::COUNT];

        for entry in entries {
            let p = DVec3::from_array(entry.point);
            if !p.is_finite() {
                return Err(ChassisError::InvalidConfig(format!(
                    "Hardpoint '{}' of '{}' has non-finite coordinates {:?}",
                    entry.role, template, entry.point
                )));
            }
            let slot = &mut points[entry.role.index()];
            if slot.is_some() {
                return Err(ChassisError::InvalidConfig(format!(
                    "Hardpoint '{}' defined twice in '{}'",
                    entry.role, template
                )));
            }
            *slot = Some(p);
        }

        Ok(Self {
            template: template.to_string(),
            points,
        })
    }

    /// Name of the template variant this table belongs to.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Left-half location of `role`.
    pub fn locate(&self, role: HardpointRole) -> ChassisResult<DVec3> {
        self.points[role.index()].ok_or_else(|| ChassisError::UnsupportedHardpoint {
            role: role.name().to_string(),
            template: self.template.clone(),
        })
    }

    /// Location of `role` on the given side, mirroring Y for the right half.
    pub fn locate_on(&self, side: Side, role: HardpointRole) -> ChassisResult<DVec3> {
        let p = self.locate(role)?;
        Ok(DVec3::new(p.x, side.y_sign() * p.y, p.z))
    }

    pub fn contains(&self, role: HardpointRole) -> bool {
        self.points[role.index()].is_some()
    }

    /// Fails on the first role in `roles` that the table lacks.
    pub fn require(&self, roles: &[HardpointRole]) -> ChassisResult<()> {
        match roles.iter().find(|r| !self.contains(**r)) {
            Some(missing) => Err(ChassisError::MissingHardpoint {
                role: missing.name().to_string(),
                template: self.template.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Defined points in role order.
    pub fn iter(&self) -> impl Iterator<Item = (HardpointRole, DVec3)> + '_ {
        HardpointRole::ALL
            .iter()
            .filter_map(|&r| self.points[r.index()].map(|p| (r, p)))
    }

    /// Number of defined roles.
    pub fn len(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance between two hardpoints on the left half.
    pub fn distance(&self, a: HardpointRole, b: HardpointRole) -> ChassisResult<f64> {
        Ok(self.locate(a)?.distance(self.locate(b)?))
    }
}
