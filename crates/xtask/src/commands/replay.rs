//! Replay a scenario and print character traces
//!
//! Loads `config.toml` and `scenarios/{name}.ron` from the data directory,
//! runs the scenario for the requested number of ticks and prints the state
//! of every character.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use map_runtime::{CharacterSnapshot, MapRuntime, RuntimeConfig, Scenario, TickReport};
use motion_content::ContentFactory;
use motion_core::{CharacterKind, MotionError};

use crate::dirs;

/// Replay a scenario and print character traces
#[derive(Parser)]
pub struct Replay {
    /// Scenario name, read from `scenarios/{NAME}.ron`
    #[arg(value_name = "NAME")]
    scenario: String,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 60)]
    ticks: usize,

    /// Print a trace row every N ticks
    #[arg(short, long, default_value_t = 1)]
    every: usize,

    /// Custom data directory (defaults to $MOTION_DATA_DIR or the platform location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// One row per character per traced tick
    Table,
    /// One JSON array of snapshots per traced tick
    Json,
    /// Final state only
    Summary,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let data_dir = dirs::data_dir(self.data_dir);
        let factory = ContentFactory::new(&data_dir);

        let motion = factory
            .load_config()
            .with_context(|| format!("Failed to load config from {}", data_dir.display()))?;
        let spec = factory
            .load_scenario(&self.scenario)
            .with_context(|| format!("Failed to load scenario '{}'", self.scenario))?;

        let config = RuntimeConfig {
            motion,
            ..RuntimeConfig::default()
        };
        let mut scenario = Scenario::from_spec(&spec, config)
            .with_context(|| format!("Failed to build scenario '{}'", self.scenario))?;

        if self.format != OutputFormat::Json {
            println!(
                "{} {} ({} ticks)",
                style("Scenario:").bold().cyan(),
                self.scenario,
                self.ticks
            );
            println!();
        }

        let every = self.every.max(1);
        let mut failures = 0usize;
        for _ in 0..self.ticks {
            let report = scenario.step()?;
            failures += report.errors.len();
            print_errors(&report);

            if (report.frame.0 as usize) % every != 0 {
                continue;
            }
            match self.format {
                OutputFormat::Table => print_table(&report, scenario.runtime()),
                OutputFormat::Json => print_json(scenario.runtime())?,
                OutputFormat::Summary => {}
            }
        }

        if self.format != OutputFormat::Json {
            print_summary(scenario.runtime(), failures);
        }
        Ok(())
    }
}

fn print_errors(report: &TickReport) {
    for (id, err) in &report.errors {
        eprintln!(
            "{} tick {} character {}: {} [{}]",
            style("route error").red().bold(),
            report.frame,
            id,
            err,
            err.error_code()
        );
    }
}

fn print_table(report: &TickReport, runtime: &MapRuntime) {
    println!("{}", style(format!("tick {}", report.frame)).bold().yellow());
    for snapshot in runtime.snapshots() {
        println!("  {}", format_row(&snapshot));
    }
}

fn format_row(snapshot: &CharacterSnapshot) -> String {
    let motion = if snapshot.jumping {
        format!("jump {:>3}", snapshot.remaining_step)
    } else if snapshot.remaining_step > 0 {
        format!("step {:>3}", snapshot.remaining_step)
    } else {
        "idle    ".to_string()
    };
    let route = snapshot
        .route_index
        .map(|index| format!("route@{}", index))
        .unwrap_or_default();
    format!(
        "{:<4} {:<12} {:<10} {:<5} {} screen=({}, {}, z={}) {}",
        snapshot.id,
        kind_label(snapshot.kind),
        snapshot.position.to_string(),
        snapshot.facing.to_string(),
        motion,
        snapshot.screen_x,
        snapshot.screen_y,
        snapshot.screen_z,
        route
    )
}

fn kind_label(kind: CharacterKind) -> String {
    match kind {
        CharacterKind::Player => "player".to_string(),
        CharacterKind::Event(event) => event.to_string(),
        CharacterKind::Vehicle(vehicle) => vehicle.to_string(),
    }
}

fn print_json(runtime: &MapRuntime) -> Result<()> {
    let json =
        serde_json::to_string(&runtime.snapshots()).context("Failed to serialize snapshots")?;
    println!("{}", json);
    Ok(())
}

fn print_summary(runtime: &MapRuntime, failures: usize) {
    println!();
    println!("{}", style("=== Final State ===").bold().green());
    for snapshot in runtime.snapshots() {
        println!("  {}", format_row(&snapshot));
    }
    println!();

    println!("{}", style("Map:").bold().yellow());
    println!("  Frame: {}", runtime.frame());
    println!("  Pending moves: {}", runtime.pending().len());
    let switches: Vec<String> = runtime
        .effects()
        .switches()
        .map(|(id, value)| format!("{}={}", id, if value { "on" } else { "off" }))
        .collect();
    if !switches.is_empty() {
        println!("  Switches: {}", switches.join(", "));
    }
    println!("  Sounds played: {}", runtime.effects().sounds().len());

    if failures > 0 {
        println!("  {} {}", style("Route errors:").red().bold(), failures);
    }
}
