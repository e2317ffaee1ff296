//! Template configuration validation.
//!
//! Validates a template config before any law object or hardpoint table
//! is handed to the topology, so a malformed table fails fast with a
//! clear diagnostic instead of producing a plausible-looking but wrong
//! simulation.

use chassis_types::constants::LENGTH_EPSILON;
use chassis_types::{ChassisError, ChassisResult};

use crate::config::{SpringConfig, TemplateConfig};
use crate::hardpoints::{HardpointRole, HardpointTable, TOE_BAR_LEAFSPRING_ROLES};

/// Validates a complete template config.
///
/// Checks:
/// - Template name is non-empty
/// - Mass table is physically valid
/// - Hardpoints are finite, unique, and cover every role the topology needs
/// - Spring and damper parameters satisfy their invariants
pub fn validate_config(config: &TemplateConfig) -> ChassisResult<()> {
    if config.name.trim().is_empty() {
        return Err(ChassisError::InvalidConfig(
            "Template name must not be empty".into(),
        ));
    }

    config.bodies.validate().map_err(|e| {
        ChassisError::InvalidConfig(format!("Template '{}' bodies: {}", config.name, e))
    })?;

    let table = HardpointTable::from_entries(&config.name, &config.hardpoints)?;
    table.require(TOE_BAR_LEAFSPRING_ROLES)?;

    config.spring.validate()?;
    config.damper.validate()?;

    check_spring_geometry(&table, &config.spring)?;

    Ok(())
}

/// Warns when the spring's assembled length falls outside its stop range.
///
/// Not an error: a template may deliberately preload a stop at design
/// ride height.
fn check_spring_geometry(table: &HardpointTable, spring: &SpringConfig) -> ChassisResult<()> {
    let design = table.distance(HardpointRole::SpringA, HardpointRole::SpringC)?;

    if let Some((min_length, max_length)) = spring.limits() {
        if design < min_length - LENGTH_EPSILON || design > max_length + LENGTH_EPSILON {
            tracing::warn!(
                template = table.template(),
                design_length = design,
                min_length,
                max_length,
                "spring hardpoints place the spring outside its stop range"
            );
        }
    }

    Ok(())
}
