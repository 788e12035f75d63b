use serde::Serialize;

use crate::domain::CourseNumber;

/// A single entry in the course catalog.
///
/// Courses are plain values owned by the [`CourseTable`](crate::CourseTable)
/// that holds them. Prerequisites are stored by course number, in the order
/// they appear in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    number: CourseNumber,
    name: String,
    prerequisites: Vec<CourseNumber>,
}

impl Course {
    /// Construct a new [`Course`].
    #[must_use]
    pub const fn new(number: CourseNumber, name: String, prerequisites: Vec<CourseNumber>) -> Self {
        Self {
            number,
            name,
            prerequisites,
        }
    }

    /// The course number, which is the catalog key.
    #[must_use]
    pub const fn number(&self) -> &CourseNumber {
        &self.number
    }

    /// The display name of the course.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The course numbers that must be completed before this course.
    #[must_use]
    pub fn prerequisites(&self) -> &[CourseNumber] {
        &self.prerequisites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(s: &str) -> CourseNumber {
        CourseNumber::new(s).unwrap()
    }

    #[test]
    fn accessors_return_fields() {
        let course = Course::new(
            number("CSCI200"),
            "Data Structures".to_string(),
            vec![number("CSCI101")],
        );

        assert_eq!(course.number(), &number("CSCI200"));
        assert_eq!(course.name(), "Data Structures");
        assert_eq!(course.prerequisites(), &[number("CSCI101")]);
    }

    #[test]
    fn serializes_for_json_output() {
        let course = Course::new(
            number("CSCI200"),
            "Data Structures".to_string(),
            vec![number("CSCI101")],
        );

        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "number": "CSCI200",
                "name": "Data Structures",
                "prerequisites": ["CSCI101"],
            })
        );
    }
}
