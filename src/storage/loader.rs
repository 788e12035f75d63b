//! Loading a course catalog from a delimited text file.
//!
//! Each non-blank line describes one course:
//!
//! ```text
//! CSCI200,Data Structures,CSCI101
//! ```
//!
//! The first field is the course number, the second the course name, and any
//! further fields are prerequisite course numbers. Every prerequisite must be
//! the course number of some line in the same file.
//!
//! Loading is all-or-nothing. The whole file is validated before any course
//! is stored, and a failed load leaves the caller's table untouched.

use std::{
    collections::HashSet,
    io,
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::{
    domain::{Config, Course, CourseNumber},
    storage::{CourseTable, TableError},
};

/// Errors that can occur while loading a course file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The course file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The course file could not be read.
    #[error("Failed to read course file: {0}")]
    Io(#[from] io::Error),

    /// A line is missing its course number or name.
    #[error("Invalid course format on line {line_number}: {line}")]
    InvalidFormat {
        /// One-based line number within the file.
        line_number: usize,
        /// The offending line, as read.
        line: String,
    },

    /// A course lists a prerequisite that is not in the file.
    #[error("Invalid prerequisite {prerequisite} for course {course} on line {line_number}")]
    UnknownPrerequisite {
        /// The course that lists the prerequisite.
        course: String,
        /// The prerequisite that could not be found.
        prerequisite: String,
        /// One-based line number within the file.
        line_number: usize,
    },

    /// The courses do not fit in the table.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// A non-blank line split into trimmed fields.
struct Record<'a> {
    line_number: usize,
    line: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    fn number(&self) -> &'a str {
        self.fields[0]
    }

    fn name(&self) -> &'a str {
        self.fields[1]
    }

    /// The non-empty fields from the third onward.
    fn prerequisites(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fields[2..].iter().copied().filter(|f| !f.is_empty())
    }
}

/// Reads and validates a course file, returning a freshly populated table.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read, if any line is
/// malformed, if any prerequisite is unknown, or if the courses do not fit in
/// a table of the configured capacity.
#[instrument(level = "debug", skip(config))]
pub fn load(path: &Path, config: &Config) -> Result<CourseTable, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(io_error),
    })?;

    let table = parse(&content, config)?;
    tracing::debug!("Loaded {} courses from {}", table.len(), path.display());
    Ok(table)
}

/// Loads a course file into an existing table.
///
/// On success the table's previous contents are discarded and replaced, and
/// the number of courses loaded is returned. On failure the table is left
/// exactly as it was.
///
/// # Errors
///
/// See [`load`].
pub fn load_into(table: &mut CourseTable, path: &Path, config: &Config) -> Result<usize, LoadError> {
    let loaded = load(path, config)?;
    *table = loaded;
    Ok(table.len())
}

/// Validates course file content and builds a table from it.
///
/// # Errors
///
/// Returns a [`LoadError`] if any line is malformed, if any prerequisite is
/// unknown, or if the courses do not fit in the table.
pub fn parse(content: &str, config: &Config) -> Result<CourseTable, LoadError> {
    let records = split_records(content, config.delimiter());

    let known = collect_course_numbers(&records)?;
    check_prerequisites(&records, &known)?;

    let mut table = CourseTable::with_capacity(config.capacity());
    for record in &records {
        let course = build_course(record)?;
        if let Some(previous) = table.insert(course)? {
            tracing::warn!(
                "Course {} on line {} replaces an earlier definition ({})",
                previous.number(),
                record.line_number,
                previous.name()
            );
        }
    }

    Ok(table)
}

fn split_records(content: &str, delimiter: char) -> Vec<Record<'_>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Record {
            line_number: i + 1,
            line,
            fields: line.split(delimiter).map(str::trim).collect(),
        })
        .collect()
}

/// First pass: every line must have a course number and a name.
fn collect_course_numbers<'a>(records: &[Record<'a>]) -> Result<HashSet<&'a str>, LoadError> {
    records
        .iter()
        .map(|record| {
            let well_formed = record.fields.len() >= 2
                && !record.number().is_empty()
                && !record.name().is_empty();
            if well_formed {
                Ok(record.number())
            } else {
                Err(LoadError::InvalidFormat {
                    line_number: record.line_number,
                    line: record.line.to_string(),
                })
            }
        })
        .collect()
}

/// Second pass: every prerequisite must name a course from the first pass.
fn check_prerequisites(records: &[Record<'_>], known: &HashSet<&str>) -> Result<(), LoadError> {
    for record in records {
        if let Some(unknown) = record.prerequisites().find(|p| !known.contains(p)) {
            return Err(LoadError::UnknownPrerequisite {
                course: record.number().to_string(),
                prerequisite: unknown.to_string(),
                line_number: record.line_number,
            });
        }
    }
    Ok(())
}

fn build_course(record: &Record<'_>) -> Result<Course, LoadError> {
    let invalid = || LoadError::InvalidFormat {
        line_number: record.line_number,
        line: record.line.to_string(),
    };

    let number = CourseNumber::new(record.number()).map_err(|_| invalid())?;
    let prerequisites = record
        .prerequisites()
        .map(CourseNumber::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    Ok(Course::new(number, record.name().to_string(), prerequisites))
}
