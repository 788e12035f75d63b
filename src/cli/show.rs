use std::{io, path::PathBuf, process};

use clap::Parser;
use course_planner::{Config, CourseNumber, report, storage};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Display a course and its prerequisites")]
pub struct Show {
    /// The course file to read
    file: PathBuf,

    /// The course number to display (case-insensitive)
    #[clap(value_parser = super::parse_course_number)]
    course: CourseNumber,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let table = storage::load(&self.file, config)?;

        let Some(course) = report::find(&table, &self.course) else {
            eprintln!("{}", format!("Course {} not found.", self.course).warning());
            process::exit(1);
        };

        match self.output {
            OutputFormat::Pretty => report::write_course(&mut io::stdout().lock(), course)?,
            OutputFormat::Json => {
                let json = report::course_json(&table, course);
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
        }

        Ok(())
    }
}
