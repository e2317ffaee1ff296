//! CLI command implementations.

use chassis_law::sweep::{sweep_length, sweep_velocity, ForceSample};
use chassis_template::{BodyKind, SuspensionTemplate, TemplateConfig, TemplateDatabase};
use chassis_types::Side;

/// Penetration shown past each stop when no sweep range is given (m).
const STOP_MARGIN: f64 = 0.05;

fn build(preset: &str) -> Result<SuspensionTemplate, Box<dyn std::error::Error>> {
    let db = TemplateDatabase::with_defaults();
    db.build(preset).map_err(|e| {
        format!("{e}. Available: {}", db.names().join(", ")).into()
    })
}

fn write_csv(csv: &str, output_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output_path {
        std::fs::write(path, csv)?;
        println!("Results written to: {path}");
    } else {
        println!("{csv}");
    }
    Ok(())
}

/// List built-in templates.
pub fn presets() -> Result<(), Box<dyn std::error::Error>> {
    let db = TemplateDatabase::with_defaults();
    println!("Chassis Templates");
    println!("─────────────────");
    for name in db.names() {
        let t = db.build(name)?;
        println!(
            "  {:<20} spring: {:<18} damper: {:<18} unsprung: {:.1} kg",
            name,
            t.spring().name(),
            t.damper().name(),
            t.masses().total_mass()
        );
    }
    Ok(())
}

/// Print hardpoints and mass table of one template.
pub fn hardpoints(preset: &str, side: &str) -> Result<(), Box<dyn std::error::Error>> {
    let side: Side = side.parse()?;
    let t = build(preset)?;

    println!("Template: {} ({} side)", t.name(), side.name());
    println!();
    println!("  {:<12} {:>10} {:>10} {:>10}", "role", "x", "y", "z");
    for (role, _) in t.hardpoints().iter() {
        let p = t.locate_on(side, role)?;
        println!("  {:<12} {:>10.4} {:>10.4} {:>10.4}", role.name(), p.x, p.y, p.z);
    }

    println!();
    println!("  {:<12} {:>9} {:>27}", "body", "mass kg", "inertia kg·m²");
    for body in BodyKind::ALL {
        let b = t.masses().get(body);
        println!(
            "  {:<12} {:>9.2} [{:>7.3}, {:>7.3}, {:>7.3}]",
            body.name(),
            b.mass,
            b.inertia[0],
            b.inertia[1],
            b.inertia[2]
        );
    }
    Ok(())
}

/// Sweep spring force over length.
pub fn spring(
    preset: &str,
    from: Option<f64>,
    to: Option<f64>,
    steps: usize,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let t = build(preset)?;
    let [spring, _] = t.connectors(Side::Left)?;

    let rest = t.spring_rest_length();
    let (min_length, max_length) = t
        .spring_limits()
        .unwrap_or((spring.design_length().min(rest), rest));
    let from = from.unwrap_or(min_length - STOP_MARGIN);
    let to = to.unwrap_or(max_length + STOP_MARGIN);

    let samples = sweep_length(spring.law().as_ref(), rest, from, to, steps)?;
    write_csv(&ForceSample::to_csv(&samples), output_path)
}

/// Sweep damper force over velocity.
pub fn damper(
    preset: &str,
    max_vel: f64,
    steps: usize,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let t = build(preset)?;
    let [_, shock] = t.connectors(Side::Left)?;

    let length = shock.design_length();
    let max_vel = max_vel.abs();
    let samples = sweep_velocity(shock.law().as_ref(), shock.rest_length, length, -max_vel, max_vel, steps)?;
    write_csv(&ForceSample::to_csv(&samples), output_path)
}

/// Validate a template config file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Chassis Validator");
    println!("─────────────────");
    println!();

    let config = TemplateConfig::load(path)?;
    match SuspensionTemplate::from_config(config) {
        Ok(t) => println!(
            "✅ Template '{}' is valid ({} hardpoints, spring rest length {:.4} m).",
            t.name(),
            t.hardpoints().len(),
            t.spring_rest_length()
        ),
        Err(e) => {
            println!("❌ Template validation failed: {e}");
            return Err(e.into());
        }
    }
    Ok(())
}

/// Print a preset as TOML.
pub fn export(preset: &str) -> Result<(), Box<dyn std::error::Error>> {
    let db = TemplateDatabase::with_defaults();
    let config = db
        .get(preset)
        .ok_or_else(|| chassis_types::ChassisError::UnknownPreset(preset.to_string()))?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
