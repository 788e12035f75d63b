//! Domain models for the course catalog.
//!
//! This module contains the core domain types: courses, course numbers, and
//! configuration.

/// Course records.
pub mod course;
pub use course::Course;

mod config;
pub use config::{Config, DEFAULT_FILE_NAME, Error as ConfigError, MAX_CAPACITY};

/// Course number parsing and validation.
pub mod course_number;
pub use course_number::{CourseNumber, Error as CourseNumberError};
