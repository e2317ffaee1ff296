//! Vehicle side selector.
//!
//! Hardpoints are authored for the left half of a symmetric assembly.
//! The right half is obtained by negating the Y coordinate.

use serde::{Deserialize, Serialize};

/// Which half of a symmetric suspension a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign applied to the Y coordinate of a left-half point.
    #[inline]
    pub fn y_sign(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl std::str::FromStr for Side {
    type Err = crate::ChassisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            other => Err(crate::ChassisError::InvalidConfig(format!(
                "Unknown side '{other}' (expected left or right)"
            ))),
        }
    }
}
