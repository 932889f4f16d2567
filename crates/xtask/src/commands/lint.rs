//! Strict check of every route in the data directory
//!
//! The runtime tolerates unknown command codes according to its policy.
//! Authored content should not contain any, so this command decodes the
//! shared library and every scenario's route table strictly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use motion_content::{RouteLibrary, RouteLoader, ScenarioLoader};

use crate::dirs;

/// Check routes and scenarios for unknown command codes
#[derive(Parser)]
pub struct Lint {
    /// Custom data directory (defaults to $MOTION_DATA_DIR or the platform location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Lint {
    pub fn execute(self) -> Result<()> {
        let data_dir = dirs::data_dir(self.data_dir);
        let mut failures = 0usize;
        let mut checked = 0usize;

        let library = data_dir.join("routes.ron");
        if library.exists() {
            checked += 1;
            report(&library, RouteLoader::load_strict(&library).map(|_| ()), &mut failures);
        }

        for path in scenario_files(&data_dir.join("scenarios"))? {
            checked += 1;
            let outcome = ScenarioLoader::load(&path)
                .and_then(|spec| RouteLibrary::from_table_strict(&spec.routes).map(|_| ()));
            report(&path, outcome, &mut failures);
        }

        println!();
        if failures > 0 {
            anyhow::bail!("{} of {} files failed", failures, checked);
        }
        println!("{} {} files", style("All clean:").bold().green(), checked);
        Ok(())
    }
}

fn report(path: &Path, outcome: Result<()>, failures: &mut usize) {
    match outcome {
        Ok(()) => println!("{} {}", style("  ok").green(), path.display()),
        Err(err) => {
            *failures += 1;
            println!("{} {}", style("FAIL").red().bold(), path.display());
            println!("     {:#}", err);
        }
    }
}

fn scenario_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read scenarios directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "ron") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
