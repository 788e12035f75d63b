use std::path::PathBuf;

use clap::Parser;
use course_planner::{Config, report, storage};
use tracing::instrument;

use super::terminal::Colorize;

const MAX_CYCLE_DISPLAY: usize = 5;

#[derive(Debug, Parser)]
#[command(about = "Check a course file for errors without starting the planner")]
pub struct Validate {
    /// The course file to check
    file: PathBuf,

    /// Suppress all output except errors
    #[arg(long, short)]
    quiet: bool,
}

impl Validate {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let table = storage::load(&self.file, config)?;
        let cycles = report::prerequisite_cycles(&table);

        if self.quiet {
            return Ok(());
        }

        println!(
            "{} {} courses loaded from {}",
            "✓".success(),
            table.len(),
            self.file.display()
        );

        if cycles.is_empty() {
            return Ok(());
        }

        // cycles do not fail validation
        println!("{}", format!("Prerequisite cycles: {}", cycles.len()).warning());
        for cycle in cycles.iter().take(MAX_CYCLE_DISPLAY) {
            let numbers: Vec<_> = cycle.iter().map(|n| n.as_str()).collect();
            println!("  - {}", numbers.join(" -> "));
        }
        if cycles.len() > MAX_CYCLE_DISPLAY {
            println!("  - ... and {} more cycles", cycles.len() - MAX_CYCLE_DISPLAY);
        }

        Ok(())
    }
}
