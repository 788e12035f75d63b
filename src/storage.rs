//! In-memory storage of the course catalog and loading it from disk.

pub mod loader;
mod table;

pub use loader::{LoadError, load, load_into};
pub use table::{CourseTable, DEFAULT_CAPACITY, Error as TableError};
