//! Integration tests for chassis-types.

use chassis_types::error::ensure_finite;
use chassis_types::{ChassisError, Side};

// ─── Side Tests ───────────────────────────────────────────────

#[test]
fn side_y_sign() {
    assert_eq!(Side::Left.y_sign(), 1.0);
    assert_eq!(Side::Right.y_sign(), -1.0);
}

#[test]
fn side_parses_from_str() {
    assert_eq!("left".parse::<Side>().unwrap(), Side::Left);
    assert_eq!("r".parse::<Side>().unwrap(), Side::Right);
    assert!("middle".parse::<Side>().is_err());
}

#[test]
fn side_is_serializable() {
    let json = serde_json::to_string(&Side::Right).unwrap();
    assert_eq!(json, "\"right\"");
    let recovered: Side = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, Side::Right);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = ChassisError::InvalidCurve("x samples not increasing at index 3".into());
    assert!(err.to_string().contains("not increasing"));
}

#[test]
fn unsupported_hardpoint_display() {
    let err = ChassisError::UnsupportedHardpoint {
        role: "draglink_c".into(),
        template: "citybus_front".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("draglink_c"));
    assert!(msg.contains("citybus_front"));
}

#[test]
fn ensure_finite_accepts_finite() {
    assert_eq!(ensure_finite("length", 0.25).unwrap(), 0.25);
}

#[test]
fn ensure_finite_rejects_nan_and_inf() {
    assert!(matches!(
        ensure_finite("vel", f64::NAN),
        Err(ChassisError::NonFiniteInput { quantity: "vel", .. })
    ));
    assert!(ensure_finite("length", f64::INFINITY).is_err());
    assert!(ensure_finite("length", f64::NEG_INFINITY).is_err());
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
    let err: ChassisError = io.into();
    assert!(err.to_string().contains("missing.toml"));
}
