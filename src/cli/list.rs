use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use course_planner::{Config, CourseTable, report, storage};
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

/// Command arguments for `planner list`.
#[derive(Debug, Parser)]
#[command(about = "Print every course in course-number order")]
pub struct List {
    /// The course file to read
    file: PathBuf,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Only print course numbers, one per line.
    #[arg(long)]
    quiet: bool,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl List {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let table = storage::load(&self.file, config)?;

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report::schedule_json(&table))?);
            }
            OutputFormat::Table if self.quiet => {
                for course in report::sorted(&table) {
                    println!("{}", course.number());
                }
            }
            OutputFormat::Table => Self::output_table(&table),
        }

        Ok(())
    }

    fn output_table(table: &CourseTable) {
        if table.is_empty() {
            println!("No courses to display");
            return;
        }

        let courses = report::sorted(table);

        if is_narrow() {
            // Stacked output for narrow terminals
            for course in &courses {
                println!("{}, {}", course.number(), course.name());
            }
        } else {
            let width = courses
                .iter()
                .map(|c| c.number().len())
                .max()
                .unwrap_or(0)
                .max("Course".len());

            println!("{:<width$}  {}", "Course", "Name");
            println!("{}", "─".repeat(width + 6).dim());
            for course in &courses {
                let requires = course.prerequisites().len();
                let suffix = if requires == 0 {
                    String::new()
                } else {
                    format!(" ({requires} prerequisite{})", if requires == 1 { "" } else { "s" })
                        .dim()
                };
                println!("{:<width$}  {}{suffix}", course.number().as_str(), course.name());
            }
        }

        println!();
        println!("Total: {}", courses.len());
    }
}
