//! Suspension template instance.
//!
//! Owns the immutable constant tables of one vehicle's suspension and the
//! two force laws built from them. The topology queries hardpoints and
//! takes the law handles at construction; after that, only `evaluate`
//! calls cross the boundary.

use std::sync::Arc;

use chassis_law::LawHandle;
use chassis_math::DVec3;
use chassis_types::{ChassisResult, Side};

use crate::config::TemplateConfig;
use crate::connector::{Connector, ConnectorKind};
use crate::hardpoints::{HardpointRole, HardpointTable};
use crate::inertia::MassTable;
use crate::validator::validate_config;

/// A fully built, validated suspension template.
#[derive(Clone)]
pub struct SuspensionTemplate {
    name: String,
    hardpoints: HardpointTable,
    masses: MassTable,
    spring: LawHandle,
    damper: LawHandle,
    spring_rest_length: f64,
    spring_limits: Option<(f64, f64)>,
}

impl SuspensionTemplate {
    /// Validates `config` and wires its constants into law objects.
    pub fn from_config(config: TemplateConfig) -> ChassisResult<Self> {
        validate_config(&config)?;

        let hardpoints = HardpointTable::from_entries(&config.name, &config.hardpoints)?;
        let spring = config.spring.build()?;
        let damper = config.damper.build()?;

        tracing::debug!(
            template = %config.name,
            spring = spring.name(),
            damper = damper.name(),
            hardpoints = hardpoints.len(),
            unsprung_mass = config.bodies.total_mass(),
            "suspension template built"
        );

        Ok(Self {
            spring_rest_length: config.spring.rest_length(),
            spring_limits: config.spring.limits(),
            name: config.name,
            hardpoints,
            masses: config.bodies,
            spring,
            damper,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Left-half location of `role`.
    pub fn locate(&self, role: HardpointRole) -> ChassisResult<DVec3> {
        self.hardpoints.locate(role)
    }

    /// Location of `role` on either side.
    pub fn locate_on(&self, side: Side, role: HardpointRole) -> ChassisResult<DVec3> {
        self.hardpoints.locate_on(side, role)
    }

    pub fn hardpoints(&self) -> &HardpointTable {
        &self.hardpoints
    }

    pub fn masses(&self) -> &MassTable {
        &self.masses
    }

    /// Spring law handle, shareable across both sides.
    pub fn spring(&self) -> LawHandle {
        Arc::clone(&self.spring)
    }

    /// Damper law handle, shareable across both sides.
    pub fn damper(&self) -> LawHandle {
        Arc::clone(&self.damper)
    }

    pub fn spring_rest_length(&self) -> f64 {
        self.spring_rest_length
    }

    /// Bump and rebound engagement lengths, if the spring has stops.
    pub fn spring_limits(&self) -> Option<(f64, f64)> {
        self.spring_limits
    }

    /// Spring force, rejecting non-finite state with `NonFiniteInput`.
    ///
    /// Solvers that guarantee finite state can call `spring().evaluate`
    /// directly.
    pub fn spring_evaluate(
        &self,
        time: f64,
        rest_length: f64,
        length: f64,
        vel: f64,
    ) -> ChassisResult<f64> {
        self.spring.try_evaluate(time, rest_length, length, vel)
    }

    /// Damper force, rejecting non-finite state with `NonFiniteInput`.
    pub fn damper_evaluate(
        &self,
        time: f64,
        rest_length: f64,
        length: f64,
        vel: f64,
    ) -> ChassisResult<f64> {
        self.damper.try_evaluate(time, rest_length, length, vel)
    }

    /// Spring and shock connectors for one side.
    ///
    /// The shock's rest length is its design length; the damper law does
    /// not depend on it.
    pub fn connectors(&self, side: Side) -> ChassisResult<[Connector; 2]> {
        let spring = Connector::new(
            ConnectorKind::Spring,
            side,
            self.locate_on(side, HardpointRole::SpringA)?,
            self.locate_on(side, HardpointRole::SpringC)?,
            self.spring_rest_length,
            self.spring(),
        );

        let shock_a = self.locate_on(side, HardpointRole::ShockA)?;
        let shock_c = self.locate_on(side, HardpointRole::ShockC)?;
        let shock = Connector::new(
            ConnectorKind::Shock,
            side,
            shock_a,
            shock_c,
            shock_a.distance(shock_c),
            self.damper(),
        );

        Ok([spring, shock])
    }
}

impl std::fmt::Debug for SuspensionTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuspensionTemplate")
            .field("name", &self.name)
            .field("hardpoints", &self.hardpoints)
            .field("masses", &self.masses)
            .field("spring", &self.spring.name())
            .field("damper", &self.damper.name())
            .field("spring_rest_length", &self.spring_rest_length)
            .field("spring_limits", &self.spring_limits)
            .finish()
    }
}
