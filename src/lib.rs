//! Plain-text Course Planning
//!
//! A course catalog is a delimited text file listing each course's number,
//! name, and prerequisites. The catalog is validated, loaded into a
//! fixed-capacity hash table, and queried one course at a time or listed in
//! course-number order.

pub mod domain;
pub use domain::{Config, Course, CourseNumber};

/// Loading the catalog and storing it in memory.
pub mod storage;
pub use storage::{CourseTable, LoadError, TableError};

pub mod report;

pub mod shell;
pub use shell::Shell;
