//! List the shared route library

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use motion_content::ContentFactory;
use motion_core::{CommandGroup, MoveCommand};

use crate::dirs;

/// List the shared route library
#[derive(Parser)]
pub struct Routes {
    /// Custom data directory (defaults to $MOTION_DATA_DIR or the platform location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Print every command of each route
    #[arg(short, long)]
    verbose: bool,
}

impl Routes {
    pub fn execute(self) -> Result<()> {
        let data_dir = dirs::data_dir(self.data_dir);
        let library = ContentFactory::new(&data_dir)
            .load_routes()
            .with_context(|| format!("Failed to load routes from {}", data_dir.display()))?;

        println!(
            "{} {} routes",
            style("Route library:").bold().cyan(),
            library.len()
        );
        println!();

        for name in library.names() {
            let Some(route) = library.get(name) else {
                continue;
            };
            let moves = route
                .commands
                .iter()
                .filter(|command| command.group() == CommandGroup::Move)
                .count();
            let unknown = route
                .commands
                .iter()
                .filter(|command| matches!(command, MoveCommand::Unknown { .. }))
                .count();

            let mut flags = Vec::new();
            if route.repeat {
                flags.push("repeat");
            }
            if route.skippable {
                flags.push("skippable");
            }
            println!(
                "  {} {:>3} commands, {:>3} moves {}",
                style(format!("{:<20}", name)).bold(),
                route.len(),
                moves,
                flags.join(" ")
            );
            if unknown > 0 {
                println!("    {} {} unknown commands", style("warning:").yellow(), unknown);
            }
            if self.verbose {
                for (index, command) in route.commands.iter().enumerate() {
                    println!("    {:>3}: {:?}", index, command);
                }
            }
        }
        Ok(())
    }
}
