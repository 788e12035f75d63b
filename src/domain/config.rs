use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::storage::DEFAULT_CAPACITY;

/// The file name looked up in the working directory when no configuration
/// path is given explicitly.
pub const DEFAULT_FILE_NAME: &str = "planner.toml";

/// The largest table capacity a configuration file may ask for.
pub const MAX_CAPACITY: usize = 1 << 16;

/// Configuration for loading and storing the course catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Versions")]
pub struct Config {
    /// The number of slots in the course table.
    ///
    /// The table never grows; loading a file with more distinct courses than
    /// this is an error.
    capacity: NonZeroUsize,

    /// The character separating fields on each line of a course file.
    delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            delimiter: default_delimiter(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, if the TOML content is
    /// invalid, or if the capacity is above [`MAX_CAPACITY`].
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.capacity.get() > MAX_CAPACITY {
            return Err(Error::CapacityTooLarge {
                path: path.to_path_buf(),
                capacity: config.capacity,
            });
        }
        Ok(config)
    }

    /// Loads `planner.toml` from the given directory, falling back to the
    /// defaults if it is missing or unreadable.
    #[must_use]
    pub fn load_or_default(dir: &Path) -> Self {
        let path = dir.join(DEFAULT_FILE_NAME);
        if !path.exists() {
            return Self::default();
        }
        Self::load(&path).unwrap_or_else(|e| {
            tracing::debug!("Failed to load config: {e}");
            Self::default()
        })
    }

    /// Returns the number of slots in the course table.
    #[must_use]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Sets the number of slots in the course table.
    pub const fn set_capacity(&mut self, capacity: NonZeroUsize) {
        self.capacity = capacity;
    }

    /// Returns the field delimiter for course files.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Sets the field delimiter for course files.
    pub const fn set_delimiter(&mut self, delimiter: char) {
        self.delimiter = delimiter;
    }
}

/// Errors raised while reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        /// The path that was parsed.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },

    /// The file asks for a table larger than [`MAX_CAPACITY`].
    #[error(
        "Invalid capacity {capacity} in config file {}: must be at most {}",
        .path.display(),
        MAX_CAPACITY
    )]
    CapacityTooLarge {
        /// The path that was parsed.
        path: PathBuf,
        /// The capacity found in the file.
        capacity: NonZeroUsize,
    },
}

const fn default_capacity() -> NonZeroUsize {
    DEFAULT_CAPACITY
}

const fn default_delimiter() -> char {
    ','
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_capacity")]
        capacity: NonZeroUsize,

        #[serde(default = "default_delimiter")]
        delimiter: char,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                capacity,
                delimiter,
            } => Self {
                capacity,
                delimiter,
            },
        }
    }
}
