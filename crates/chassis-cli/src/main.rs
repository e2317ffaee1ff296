//! Chassis CLI — inspect suspension templates and sweep their force laws.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "chassis")]
#[command(version, about = "Chassis — suspension force laws and hardpoint tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in templates.
    Presets,

    /// Print the hardpoint table of a template.
    Hardpoints {
        /// Template preset name.
        #[arg(short, long, default_value = "citybus_front")]
        preset: String,

        /// Which half of the suspension (left, right).
        #[arg(short, long, default_value = "left")]
        side: String,
    },

    /// Sweep the spring force over connector length.
    Spring {
        #[arg(short, long, default_value = "citybus_front")]
        preset: String,

        /// Shortest length (m). Defaults to 50 mm inside the bump stop.
        #[arg(long)]
        from: Option<f64>,

        /// Longest length (m). Defaults to 50 mm past the rebound stop.
        #[arg(long)]
        to: Option<f64>,

        #[arg(long, default_value_t = chassis_types::constants::DEFAULT_SWEEP_STEPS)]
        steps: usize,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Sweep the damper force over connector velocity.
    Damper {
        #[arg(short, long, default_value = "citybus_front")]
        preset: String,

        /// Velocity range is [-max_vel, max_vel] (m/s).
        #[arg(long, default_value_t = 2.0)]
        max_vel: f64,

        #[arg(long, default_value_t = chassis_types::constants::DEFAULT_SWEEP_STEPS)]
        steps: usize,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a template config (TOML).
    Validate {
        /// Path to template config file.
        path: String,
    },

    /// Print a built-in template as TOML.
    Export {
        #[arg(short, long, default_value = "citybus_front")]
        preset: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Presets => commands::presets(),
        Commands::Hardpoints { preset, side } => commands::hardpoints(&preset, &side),
        Commands::Spring {
            preset,
            from,
            to,
            steps,
            output,
        } => commands::spring(&preset, from, to, steps, output.as_deref()),
        Commands::Damper {
            preset,
            max_vel,
            steps,
            output,
        } => commands::damper(&preset, max_vel, steps, output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Export { preset } => commands::export(&preset),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
