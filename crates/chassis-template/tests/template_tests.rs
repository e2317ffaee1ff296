//! Integration tests for chassis-template.

use chassis_math::DVec3;
use chassis_template::presets::citybus_front;
use chassis_template::validator::validate_config;
use chassis_template::{
    BodyKind, ConnectorKind, DamperConfig, HardpointEntry, HardpointRole, HardpointTable,
    SpringConfig, SuspensionTemplate, TemplateConfig, TemplateDatabase,
};
use chassis_types::{ChassisError, Side};

fn bus() -> SuspensionTemplate {
    SuspensionTemplate::from_config(citybus_front()).unwrap()
}

// ─── Hardpoint Tests ──────────────────────────────────────────

#[test]
fn role_names_round_trip() {
    for role in HardpointRole::ALL {
        assert_eq!(role.name().parse::<HardpointRole>().unwrap(), role);
    }
    assert!("wishbone_upper".parse::<HardpointRole>().is_err());
}

#[test]
fn role_indices_are_dense() {
    for (i, role) in HardpointRole::ALL.iter().enumerate() {
        assert_eq!(role.index(), i);
    }
}

#[test]
fn citybus_hardpoints() {
    let t = bus();
    assert_eq!(t.locate(HardpointRole::SpringA).unwrap(), DVec3::new(0.0, 0.3824, 0.0476));
    assert_eq!(t.locate(HardpointRole::ShockA).unwrap(), DVec3::new(-0.125, 0.441, -0.0507));
    assert_eq!(t.locate(HardpointRole::Spindle).unwrap(), DVec3::new(0.0, 0.7325 + 0.275, 0.0));

    let drl = t.locate(HardpointRole::KnuckleDrl).unwrap();
    assert!((drl.x - 0.05818456).abs() < 1e-12);
    assert!((drl.y - (0.8125 - 0.29680917)).abs() < 1e-9);
    assert_eq!(drl.z, 0.2);

    let drag = t.locate(HardpointRole::DraglinkC).unwrap();
    assert!((drag.x - 1.6).abs() < 1e-12);
}

#[test]
fn locate_is_deterministic() {
    let t = bus();
    for role in HardpointRole::ALL {
        let a = t.locate(role).unwrap();
        let b = t.locate(role).unwrap();
        assert_eq!(a.to_array().map(f64::to_bits), b.to_array().map(f64::to_bits));
    }
}

#[test]
fn right_side_mirrors_y() {
    let t = bus();
    for role in HardpointRole::ALL {
        let left = t.locate_on(Side::Left, role).unwrap();
        let right = t.locate_on(Side::Right, role).unwrap();
        assert_eq!(left, t.locate(role).unwrap());
        assert_eq!(right, DVec3::new(left.x, -left.y, left.z));
    }
}

#[test]
fn unsupported_role_is_an_error() {
    let table = HardpointTable::from_entries(
        "partial",
        &[HardpointEntry {
            role: HardpointRole::SpringA,
            point: [0.0, 0.4, 0.05],
        }],
    )
    .unwrap();

    assert!(table.locate(HardpointRole::SpringA).is_ok());
    match table.locate(HardpointRole::DraglinkC) {
        Err(ChassisError::UnsupportedHardpoint { role, template }) => {
            assert_eq!(role, "draglink_c");
            assert_eq!(template, "partial");
        }
        other => panic!("expected UnsupportedHardpoint, got {other:?}"),
    }
}

#[test]
fn require_reports_missing_role() {
    let table = HardpointTable::from_entries("empty", &[]).unwrap();
    assert!(table.is_empty());
    assert!(matches!(
        table.require(&[HardpointRole::Spindle]),
        Err(ChassisError::MissingHardpoint { .. })
    ));
    assert!(table.require(&[]).is_ok());
}

#[test]
fn duplicate_or_non_finite_hardpoints_rejected() {
    let entry = HardpointEntry {
        role: HardpointRole::ShockC,
        point: [0.0, 0.4, 0.4],
    };
    assert!(HardpointTable::from_entries("dup", &[entry, entry]).is_err());

    let bad = HardpointEntry {
        role: HardpointRole::ShockC,
        point: [0.0, f64::NAN, 0.4],
    };
    assert!(HardpointTable::from_entries("nan", &[bad]).is_err());
}

#[test]
fn table_iterates_in_role_order() {
    let t = bus();
    let roles: Vec<HardpointRole> = t.hardpoints().iter().map(|(r, _)| r).collect();
    assert_eq!(roles, HardpointRole::ALL.to_vec());
    assert_eq!(t.hardpoints().len(), HardpointRole::COUNT);
}

// ─── Mass Table Tests ─────────────────────────────────────────

#[test]
fn citybus_masses() {
    let t = bus();
    let axle = t.masses().get(BodyKind::AxleTube);
    assert!((axle.mass - 508.4).abs() < 1e-9);
    assert!((axle.inertia[0] - 22.21 * 6.56).abs() < 1e-9);
    assert_eq!(axle.radius, 0.0476);
    assert!((t.masses().axle_shaft_inertia - 2.624).abs() < 1e-9);
    assert_eq!(t.masses().spindle_width, 0.06);
}

#[test]
fn total_unsprung_mass() {
    let t = bus();
    let expected = (124.0 + 2.0 * (14.705 + 10.0) + 5.0 + 5.0) * 4.1;
    assert!((t.masses().total_mass() - expected).abs() < 1e-9);
}

#[test]
fn non_positive_mass_rejected() {
    let mut config = citybus_front();
    config.bodies.knuckle.mass = 0.0;
    assert!(matches!(validate_config(&config), Err(ChassisError::InvalidConfig(_))));
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn citybus_config_is_valid() {
    assert!(validate_config(&citybus_front()).is_ok());
}

#[test]
fn empty_name_rejected() {
    let mut config = citybus_front();
    config.name = "  ".into();
    assert!(validate_config(&config).is_err());
}

#[test]
fn missing_required_hardpoint_rejected() {
    let mut config = citybus_front();
    config.hardpoints.retain(|e| e.role != HardpointRole::TierodK);
    assert!(matches!(
        validate_config(&config),
        Err(ChassisError::MissingHardpoint { .. })
    ));
}

#[test]
fn inverted_spring_limits_rejected() {
    let mut config = citybus_front();
    config.spring = SpringConfig::WithStops {
        stiffness: 1000.0,
        rest_length: 0.4,
        min_length: 0.5,
        max_length: 0.3,
        stop_curve: vec![(0.0, 0.0), (0.01, 100.0)],
    };
    assert!(matches!(validate_config(&config), Err(ChassisError::InvalidLaw(_))));
}

#[test]
fn non_increasing_stop_curve_rejected() {
    let mut config = citybus_front();
    if let SpringConfig::WithStops { stop_curve, .. } = &mut config.spring {
        stop_curve.swap(2, 3);
    }
    assert!(matches!(validate_config(&config), Err(ChassisError::InvalidCurve(_))));
    assert!(matches!(
        SuspensionTemplate::from_config(config),
        Err(ChassisError::InvalidCurve(_))
    ));
}

#[test]
fn offset_stop_curve_rejected_by_validator() {
    let mut config = citybus_front();
    if let SpringConfig::WithStops { stop_curve, .. } = &mut config.spring {
        *stop_curve = vec![(0.0, 10.0), (0.01, 100.0)];
    }
    assert!(matches!(validate_config(&config), Err(ChassisError::InvalidCurve(_))));
    assert!(matches!(
        SuspensionTemplate::from_config(config),
        Err(ChassisError::InvalidCurve(_))
    ));
}

#[test]
fn single_sample_stop_curve_rejected() {
    let mut config = citybus_front();
    if let SpringConfig::WithStops { stop_curve, .. } = &mut config.spring {
        *stop_curve = vec![(0.0, 0.0)];
    }
    assert!(matches!(validate_config(&config), Err(ChassisError::InvalidCurve(_))));
}

#[test]
fn negative_damper_slope_rejected() {
    let mut config = citybus_front();
    config.damper = DamperConfig::Degressive {
        compression_slope: -1.0,
        compression_degressivity: 1.0,
        expansion_slope: 1.0,
        expansion_degressivity: 1.0,
    };
    assert!(validate_config(&config).is_err());
}

// ─── Template Tests ───────────────────────────────────────────

#[test]
fn spring_force_zero_at_rest() {
    let t = bus();
    let rest = t.spring_rest_length();
    assert!((rest - 0.4621225507207084).abs() < 1e-15);
    assert_eq!(t.spring_evaluate(0.0, rest, rest, 0.0).unwrap(), 0.0);
}

#[test]
fn spring_limits_exposed() {
    let (min_length, max_length) = bus().spring_limits().unwrap();
    assert!((min_length - 0.3).abs() < 1e-12);
    assert!((max_length - 0.5).abs() < 1e-12);
}

#[test]
fn spring_bump_example() {
    let t = bus();
    let rest = t.spring_rest_length();
    let f = t.spring_evaluate(0.0, rest, 0.28, 0.0).unwrap();
    let expected = (rest - 0.28) * 565480.0 + 2500.0;
    assert!((f - expected).abs() < 1e-6);
}

#[test]
fn damper_example() {
    let t = bus();
    assert_eq!(t.damper_evaluate(0.0, 0.0, 0.0, 1.0).unwrap(), -30276.0);
    assert_eq!(t.damper_evaluate(0.0, 0.0, 0.0, 0.0).unwrap(), 0.0);
}

#[test]
fn template_evaluate_rejects_non_finite_state() {
    let t = bus();
    let rest = t.spring_rest_length();

    assert!(matches!(
        t.spring_evaluate(0.0, rest, f64::NAN, 0.0),
        Err(ChassisError::NonFiniteInput { .. })
    ));
    assert!(matches!(
        t.spring_evaluate(0.0, rest, f64::INFINITY, 0.0),
        Err(ChassisError::NonFiniteInput { .. })
    ));
    assert!(matches!(
        t.damper_evaluate(0.0, rest, 0.4, f64::NAN),
        Err(ChassisError::NonFiniteInput { .. })
    ));
    assert!(t.damper_evaluate(0.0, rest, 0.4, 0.5).unwrap().is_finite());
}

#[test]
fn law_handles_are_shared() {
    let t = bus();
    let a = t.spring();
    let b = t.spring();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    assert_eq!(t.damper().name(), "degressive_damper");
}

#[test]
fn connectors_wire_hardpoints_and_laws() {
    let t = bus();
    let [spring, shock] = t.connectors(Side::Right).unwrap();

    assert_eq!(spring.kind, ConnectorKind::Spring);
    assert_eq!(spring.side, Side::Right);
    assert_eq!(spring.point_a.y, -0.3824);
    assert_eq!(spring.rest_length, t.spring_rest_length());
    assert!((spring.design_length() - 0.3).abs() < 1e-12);
    assert!((spring.axis() - DVec3::Z).length() < 1e-12);

    assert_eq!(shock.kind, ConnectorKind::Shock);
    assert_eq!(shock.law().name(), "degressive_damper");
    assert!(shock.force(0.0, shock.design_length(), 0.5) < 0.0);
}

#[test]
fn connector_try_force_rejects_nan() {
    let t = bus();
    let [spring, _] = t.connectors(Side::Left).unwrap();
    assert!(spring.try_force(0.0, f64::NAN, 0.0).is_err());
    assert!(spring.try_force(0.0, 0.4, 0.0).is_ok());
}

#[test]
fn linear_variants_build() {
    let mut config = citybus_front();
    config.name = "linear_test".into();
    config.spring = SpringConfig::Linear {
        stiffness: 200000.0,
        rest_length: 0.45,
    };
    config.damper = DamperConfig::Linear { coefficient: 5000.0 };

    let t = SuspensionTemplate::from_config(config).unwrap();
    assert_eq!(t.spring().name(), "linear_spring");
    assert!(t.spring_limits().is_none());
    assert_eq!(t.damper_evaluate(0.0, 0.0, 0.0, 0.2).unwrap(), -1000.0);
    // No stops: far below the old bump limit the force stays linear.
    assert!((t.spring_evaluate(0.0, 0.45, 0.1, 0.0).unwrap() - 70000.0).abs() < 1e-6);
}

// ─── Config Serialization Tests ───────────────────────────────

#[test]
fn config_toml_round_trip() {
    let config = citybus_front();
    let toml_str = config.to_toml_string().unwrap();
    let recovered = TemplateConfig::from_toml_str(&toml_str).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn stop_curve_defaults_when_omitted() {
    let mut config = citybus_front();
    config.name = "defaulted".into();
    let mut doc: toml::Table = toml::from_str(&config.to_toml_string().unwrap()).unwrap();
    doc.get_mut("spring")
        .and_then(|s| s.as_table_mut())
        .unwrap()
        .remove("stop_curve");
    let recovered = TemplateConfig::from_toml_str(&toml::to_string(&doc).unwrap()).unwrap();
    assert_eq!(recovered.spring, citybus_front().spring);
}

#[test]
fn malformed_toml_is_serialization_error() {
    let result = TemplateConfig::from_toml_str("name = 3");
    assert!(matches!(result, Err(ChassisError::Serialization(_))));
}

#[test]
fn default_config_is_citybus() {
    assert_eq!(TemplateConfig::default().name, "citybus_front");
}

// ─── Database Tests ───────────────────────────────────────────

#[test]
fn default_database_has_citybus() {
    let db = TemplateDatabase::with_defaults();
    assert_eq!(db.len(), 1);
    assert_eq!(db.names(), vec!["citybus_front"]);
    assert!(db.build("citybus_front").is_ok());
}

#[test]
fn unknown_preset_errors() {
    let db = TemplateDatabase::with_defaults();
    assert!(matches!(db.build("tram"), Err(ChassisError::UnknownPreset(_))));
}

#[test]
fn register_custom_template() {
    let mut db = TemplateDatabase::empty();
    assert!(db.is_empty());
    let mut config = citybus_front();
    config.name = "citybus_front_soft".into();
    config.damper = DamperConfig::Linear { coefficient: 1.0 };
    db.register(config);
    assert!(db.get("citybus_front_soft").is_some());
    assert!(db.get("citybus_front").is_none());
}
