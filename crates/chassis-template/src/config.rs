//! Template configuration.
//!
//! Everything that parameterizes one concrete suspension: hardpoints,
//! mass table, and the spring and damper laws. Serializable to TOML so
//! variants can live outside the binary.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use chassis_law::stop_curves::ADAMS_PROGRESSIVE;
use chassis_law::{
    DamperParams, DegressiveDamper, LawHandle, LinearDamper, LinearSpring, SpringParams,
    SpringWithStops,
};
use chassis_math::PiecewiseLinear;
use chassis_types::{ChassisError, ChassisResult};

use crate::hardpoints::HardpointEntry;
use crate::inertia::MassTable;

/// Complete description of one suspension template instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Template variant name (e.g. "citybus_front").
    pub name: String,

    /// Left-half hardpoints.
    pub hardpoints: Vec<HardpointEntry>,

    /// Body mass properties.
    pub bodies: MassTable,

    /// Spring force law.
    pub spring: SpringConfig,

    /// Shock absorber force law.
    pub damper: DamperConfig,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        crate::presets::citybus_front()
    }
}

impl TemplateConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> ChassisResult<Self> {
        toml::from_str(content).map_err(|e| ChassisError::Serialization(e.to_string()))
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ChassisResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> ChassisResult<String> {
        toml::to_string(self).map_err(|e| ChassisError::Serialization(e.to_string()))
    }
}

fn default_stop_curve() -> Vec<(f64, f64)> {
    ADAMS_PROGRESSIVE.to_vec()
}

/// Spring law selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpringConfig {
    /// Linear rate with bump and rebound stops.
    WithStops {
        stiffness: f64,
        rest_length: f64,
        min_length: f64,
        max_length: f64,
        /// Penetration (m) → force (N). Defaults to the ADAMS progressive stop.
        #[serde(default = "default_stop_curve")]
        stop_curve: Vec<(f64, f64)>,
    },
    /// Linear rate only.
    Linear { stiffness: f64, rest_length: f64 },
}

impl SpringConfig {
    /// Free length the topology assigns to the spring connector.
    pub fn rest_length(&self) -> f64 {
        match self {
            SpringConfig::WithStops { rest_length, .. } => *rest_length,
            SpringConfig::Linear { rest_length, .. } => *rest_length,
        }
    }

    /// Linear rate of either variant (N/m).
    pub fn stiffness(&self) -> f64 {
        match self {
            SpringConfig::WithStops { stiffness, .. } => *stiffness,
            SpringConfig::Linear { stiffness, .. } => *stiffness,
        }
    }

    /// Stop travel limits `(min_length, max_length)`, if the variant has stops.
    pub fn limits(&self) -> Option<(f64, f64)> {
        match self {
            SpringConfig::WithStops {
                min_length,
                max_length,
                ..
            } => Some((*min_length, *max_length)),
            SpringConfig::Linear { .. } => None,
        }
    }

    /// Checks parameters without building the law.
    pub fn validate(&self) -> ChassisResult<()> {
        match self {
            SpringConfig::WithStops {
                stiffness,
                rest_length,
                min_length,
                max_length,
                stop_curve,
            } => {
                SpringParams {
                    stiffness: *stiffness,
                    rest_length: *rest_length,
                    min_length: *min_length,
                    max_length: *max_length,
                }
                .validate()?;
                let curve = PiecewiseLinear::new(stop_curve.clone())?;
                SpringWithStops::check_stop_curve(&curve)
            }
            SpringConfig::Linear {
                stiffness,
                rest_length,
            } => {
                LinearSpring::new(*stiffness)?;
                if !rest_length.is_finite() || *rest_length <= 0.0 {
                    return Err(ChassisError::InvalidLaw(format!(
                        "Spring rest_length must be positive, got {rest_length}"
                    )));
                }
                Ok(())
            }
        }
    }

    /// Builds the law object.
    pub fn build(&self) -> ChassisResult<LawHandle> {
        self.validate()?;
        match self {
            SpringConfig::WithStops {
                stiffness,
                rest_length,
                min_length,
                max_length,
                stop_curve,
            } => {
                let params = SpringParams {
                    stiffness: *stiffness,
                    rest_length: *rest_length,
                    min_length: *min_length,
                    max_length: *max_length,
                };
                let curve = PiecewiseLinear::new(stop_curve.clone())?;
                Ok(Arc::new(SpringWithStops::new(&params, curve)?))
            }
            SpringConfig::Linear { stiffness, .. } => Ok(Arc::new(LinearSpring::new(*stiffness)?)),
        }
    }
}

/// Damper law selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DamperConfig {
    /// Asymmetric degressive characteristic.
    Degressive {
        compression_slope: f64,
        compression_degressivity: f64,
        expansion_slope: f64,
        expansion_degressivity: f64,
    },
    /// Viscous, `F = -c·v`.
    Linear { coefficient: f64 },
}

impl DamperConfig {
    pub fn validate(&self) -> ChassisResult<()> {
        match self {
            DamperConfig::Degressive {
                compression_slope,
                compression_degressivity,
                expansion_slope,
                expansion_degressivity,
            } => DamperParams {
                compression_slope: *compression_slope,
                compression_degressivity: *compression_degressivity,
                expansion_slope: *expansion_slope,
                expansion_degressivity: *expansion_degressivity,
            }
            .validate(),
            DamperConfig::Linear { coefficient } => LinearDamper::new(*coefficient).map(|_| ()),
        }
    }

    /// Builds the law object.
    pub fn build(&self) -> ChassisResult<LawHandle> {
        match self {
            DamperConfig::Degressive {
                compression_slope,
                compression_degressivity,
                expansion_slope,
                expansion_degressivity,
            } => Ok(Arc::new(DegressiveDamper::new(DamperParams {
                compression_slope: *compression_slope,
                compression_degressivity: *compression_degressivity,
                expansion_slope: *expansion_slope,
                expansion_degressivity: *expansion_degressivity,
            })?)),
            DamperConfig::Linear { coefficient } => Ok(Arc::new(LinearDamper::new(*coefficient)?)),
        }
    }
}
