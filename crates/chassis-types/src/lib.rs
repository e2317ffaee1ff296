//! # chassis-types
//!
//! Shared types, error types, and physical constants for the
//! Chassis suspension template crates.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Chassis crates share.

pub mod constants;
pub mod error;
pub mod side;

pub use error::{ChassisError, ChassisResult};
pub use side::Side;
