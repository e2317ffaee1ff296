//! Template database with built-in vehicle presets.
//!
//! Presets are complete [`TemplateConfig`] values keyed by name.
//! Custom templates (e.g. loaded from TOML) can be registered at runtime.

use std::collections::HashMap;

use chassis_law::stop_curves::ADAMS_PROGRESSIVE;
use chassis_types::{ChassisError, ChassisResult};

use crate::config::{DamperConfig, SpringConfig, TemplateConfig};
use crate::hardpoints::{HardpointEntry, HardpointRole};
use crate::inertia::{BodyProperties, MassTable};
use crate::template::SuspensionTemplate;

/// A named collection of suspension template presets.
#[derive(Debug, Clone)]
pub struct TemplateDatabase {
    templates: HashMap<String, TemplateConfig>,
}

impl TemplateDatabase {
    /// Creates a new database with the built-in presets.
    pub fn with_defaults() -> Self {
        let mut db = Self::empty();
        db.register(citybus_front());
        db
    }

    /// Creates an empty database.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Registers a template. Overwrites if the name already exists.
    pub fn register(&mut self, config: TemplateConfig) {
        self.templates.insert(config.name.clone(), config);
    }

    /// Looks up a template by name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<&TemplateConfig> {
        self.templates.get(name)
    }

    /// Builds a ready-to-use template from a registered preset.
    pub fn build(&self, name: &str) -> ChassisResult<SuspensionTemplate> {
        let config = self
            .get(name)
            .ok_or_else(|| ChassisError::UnknownPreset(name.to_string()))?;
        SuspensionTemplate::from_config(config.clone())
    }

    /// Returns all registered template names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateDatabase {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Built-in Presets ─────────────────────────────────────────────────

/// Mass scale applied to the light-truck base masses for the bus.
const CITYBUS_MASS_SCALE: f64 = 4.1;
/// Inertia scale applied to the light-truck base inertias for the bus.
const CITYBUS_INERTIA_SCALE: f64 = 6.56;

const CITYBUS_AXLE_TUBE_RADIUS: f64 = 0.0476;
const CITYBUS_SPRING_DESIGN_LENGTH: f64 = 0.4;

/// Lateral position of the knuckle center (m).
const CITYBUS_KNUCKLE_Y: f64 = 0.7325 + 0.08;

/// City bus front axle: rigid toe-bar steer axle on leaf springs.
///
/// Spring and stops from ADAMS/Car bus data; masses and inertias are the
/// light-truck axle values scaled up for a 12 m bus.
pub fn citybus_front() -> TemplateConfig {
    TemplateConfig {
        name: "citybus_front".into(),
        hardpoints: citybus_front_hardpoints(),
        bodies: citybus_front_bodies(),
        spring: SpringConfig::WithStops {
            stiffness: 565480.0,
            rest_length: CITYBUS_SPRING_DESIGN_LENGTH + 0.0621225507207084,
            min_length: CITYBUS_SPRING_DESIGN_LENGTH - 0.10,
            max_length: CITYBUS_SPRING_DESIGN_LENGTH + 0.10,
            stop_curve: ADAMS_PROGRESSIVE.to_vec(),
        },
        damper: DamperConfig::Degressive {
            compression_slope: 30276.0 * 2.0,
            compression_degressivity: 3.0,
            expansion_slope: 30276.0 * 2.0,
            expansion_degressivity: 1.0,
        },
    }
}

fn citybus_front_hardpoints() -> Vec<HardpointEntry> {
    use HardpointRole::*;

    let r = CITYBUS_AXLE_TUBE_RADIUS;
    let ky = CITYBUS_KNUCKLE_Y;
    // Kingpin inclination offset of the lower/upper knuckle joints.
    let kpi = 0.0098058067569092;

    [
        (SpringA, [0.0, 0.3824, r]),
        (SpringC, [0.0, 0.3824, r + CITYBUS_SPRING_DESIGN_LENGTH - 0.1]),
        (ShockA, [-0.125, 0.441, -0.0507]),
        (ShockC, [-0.2, 0.4193, 0.5298 - 0.1]),
        (Spindle, [0.0, 0.7325 + 0.275, 0.0]),
        (KnuckleCm, [0.0, ky, 0.0]),
        (KnuckleL, [0.0, ky + kpi, -0.1]),
        (KnuckleU, [0.0, ky - kpi, 0.1]),
        (KnuckleDrl, [0.02909228 * 2.0, ky - 0.19787278 * 1.5, 0.2]),
        (TierodK, [-0.24777 * 2.0, ky - 0.033323 * 1.5, 0.0]),
        (DraglinkC, [0.6 + 0.6 + 0.4, ky - 0.19787278 * 1.5, 0.1]),
    ]
    .into_iter()
    .map(|(role, point)| HardpointEntry { role, point })
    .collect()
}

fn citybus_front_bodies() -> MassTable {
    let m = CITYBUS_MASS_SCALE;
    let j = CITYBUS_INERTIA_SCALE;

    MassTable {
        axle_tube: BodyProperties {
            mass: 124.0 * m,
            inertia: [22.21 * j, 0.0775 * j, 22.21 * j],
            radius: CITYBUS_AXLE_TUBE_RADIUS,
        },
        spindle: BodyProperties {
            mass: 14.705 * m,
            inertia: [0.04117 * j, 0.07352 * j, 0.04117 * j],
            radius: 0.10,
        },
        knuckle: BodyProperties {
            mass: 10.0 * m,
            inertia: [0.1 * j, 0.1 * j, 0.1 * j],
            radius: 0.05,
        },
        tierod: BodyProperties {
            mass: 5.0 * m,
            inertia: [1.0 * j, 0.1 * j, 1.0 * j],
            radius: 0.02,
        },
        draglink: BodyProperties {
            mass: 5.0 * m,
            inertia: [0.1 * j, 1.0 * j, 0.1 * j],
            radius: 0.02,
        },
        spindle_width: 0.06,
        axle_shaft_inertia: 0.4 * j,
    }
}
