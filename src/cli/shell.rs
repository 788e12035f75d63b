use std::{io, path::PathBuf};

use clap::Parser;
use course_planner::Config;
use tracing::instrument;

#[derive(Debug, Parser, Default)]
#[command(about = "Run the interactive, menu-driven planner")]
pub struct Shell {
    /// A course file to load before the first menu is shown
    file: Option<PathBuf>,
}

impl Shell {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: Config) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();

        let mut shell = course_planner::Shell::new(stdin.lock(), stdout.lock(), config);
        if let Some(file) = self.file {
            shell = shell.with_preload(file);
        }

        shell.run()?;
        Ok(())
    }
}
