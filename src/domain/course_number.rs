use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;
use serde::Serialize;

/// The identifier of a course, such as `CSCI101`.
///
/// A course number is a non-empty string with no leading or trailing
/// whitespace. Comparison is exact (case-sensitive) and ordering is plain
/// lexicographic string ordering, which is the order the catalog is listed in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct CourseNumber(NonEmptyString);

impl CourseNumber {
    /// Creates a new `CourseNumber`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the string is empty once trimmed.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        let trimmed = s.trim();
        let inner = if trimmed.len() == s.len() {
            s
        } else {
            trimmed.to_string()
        };
        NonEmptyString::new(inner)
            .map(Self)
            .map_err(|_| Error)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns a copy of this course number with ASCII letters upper-cased.
    ///
    /// Interactive input is normalized this way before lookup; stored
    /// course numbers are never altered.
    #[must_use]
    pub fn to_uppercase(&self) -> Self {
        Self(
            NonEmptyString::new(self.as_str().to_uppercase())
                .unwrap_or_else(|_| self.0.clone()),
        )
    }
}

impl FromStr for CourseNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CourseNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for CourseNumber {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<str> for CourseNumber {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CourseNumber {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for CourseNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CourseNumber> for String {
    fn from(value: CourseNumber) -> Self {
        value.as_str().to_owned()
    }
}

/// Error returned when a course number is empty or whitespace-only.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid course number: must not be empty")]
pub struct Error;
