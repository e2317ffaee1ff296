//! # chassis-template
//!
//! Constant tables and force-law wiring for one concrete suspension.
//!
//! Defines the boundary an external multibody topology consumes: a
//! hardpoint registry, a mass/inertia table, and spring and damper law
//! handles, all built once from a validated [`TemplateConfig`].

pub mod config;
pub mod connector;
pub mod hardpoints;
pub mod inertia;
pub mod presets;
pub mod template;
pub mod validator;

pub use config::{DamperConfig, SpringConfig, TemplateConfig};
pub use connector::{Connector, ConnectorKind};
pub use hardpoints::{HardpointEntry, HardpointRole, HardpointTable};
pub use inertia::{BodyKind, BodyProperties, MassTable};
pub use presets::TemplateDatabase;
pub use template::SuspensionTemplate;
