use std::path::PathBuf;

mod list;
mod shell;
mod show;
mod terminal;
mod validate;

use anyhow::Context;
use clap::ArgAction;
use course_planner::{Config, CourseNumber};
use list::List;
use shell::Shell;
use show::Show;
use validate::Validate;

/// Parse a course number from a string, normalizing to uppercase.
///
/// This is a CLI boundary function that accepts lowercase input
/// and normalizes it before parsing.
fn parse_course_number(s: &str) -> Result<CourseNumber, String> {
    let uppercase = s.to_uppercase();
    uppercase.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a configuration file (defaults to ./planner.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = Self::load_config(self.config.as_deref())?;

        self.command
            .unwrap_or_else(|| Command::Shell(Shell::default()))
            .run(config)
    }

    fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
        match path {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display())),
            None => {
                let cwd = std::env::current_dir().context("Failed to read working directory")?;
                Ok(Config::load_or_default(&cwd))
            }
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout belongs to the planner's own output
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive planner (default)
    Shell(Shell),

    /// Print every course in course-number order
    List(List),

    /// Show a single course and its prerequisites
    Show(Show),

    /// Check a course file without starting the planner
    ///
    /// Reports malformed lines, unknown prerequisites, and prerequisite
    /// cycles.
    Validate(Validate),
}

impl Command {
    fn run(self, config: Config) -> anyhow::Result<()> {
        match self {
            Self::Shell(command) => command.run(config)?,
            Self::List(command) => command.run(&config)?,
            Self::Show(command) => command.run(&config)?,
            Self::Validate(command) => command.run(&config)?,
        }
        Ok(())
    }
}
