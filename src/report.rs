//! Queries and reports over a loaded [`CourseTable`].
//!
//! Rendering functions write to any [`io::Write`] so the interactive shell,
//! the subcommands, and the tests all share the same output.

use std::io::{self, Write};

use petgraph::{algo::tarjan_scc, graphmap::DiGraphMap};
use serde_json::json;

use crate::{
    domain::{Course, CourseNumber},
    storage::CourseTable,
};

/// Looks up a course by its exact course number.
///
/// A miss is a normal outcome, not an error.
#[must_use]
pub fn find<'a>(table: &'a CourseTable, number: &str) -> Option<&'a Course> {
    table.search(number)
}

/// Returns every course in the table, ordered by course number.
///
/// The courses are collected in slot order and then ordered with an in-place
/// selection sort.
#[must_use]
pub fn sorted(table: &CourseTable) -> Vec<&Course> {
    let mut courses: Vec<&Course> = table.iter().collect();
    selection_sort_by_number(&mut courses);
    courses
}

fn selection_sort_by_number(courses: &mut [&Course]) {
    for i in 0..courses.len() {
        let mut min = i;
        for j in (i + 1)..courses.len() {
            if courses[j].number() < courses[min].number() {
                min = j;
            }
        }
        if min != i {
            courses.swap(i, min);
        }
    }
}

/// Writes a single course: its number and name, then its prerequisites (if
/// any) on a second line.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_course(w: &mut impl Write, course: &Course) -> io::Result<()> {
    writeln!(w, "{}, {}", course.number(), course.name())?;

    if !course.prerequisites().is_empty() {
        let prerequisites = course
            .prerequisites()
            .iter()
            .map(CourseNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(w, "Prerequisites: {prerequisites}")?;
    }

    Ok(())
}

/// Writes the whole catalog in course-number order.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_schedule(w: &mut impl Write, table: &CourseTable) -> io::Result<()> {
    if table.is_empty() {
        return writeln!(w, "No courses to display");
    }

    writeln!(w, "Here is a sample schedule:")?;
    writeln!(w)?;
    for course in sorted(table) {
        writeln!(w, "{}, {}", course.number(), course.name())?;
    }

    Ok(())
}

/// Renders a course as JSON, with each prerequisite's name resolved from the
/// table.
#[must_use]
pub fn course_json(table: &CourseTable, course: &Course) -> serde_json::Value {
    let prerequisites: Vec<_> = course
        .prerequisites()
        .iter()
        .map(|number| {
            json!({
                "number": number,
                "name": table.search(number).map(Course::name),
            })
        })
        .collect();

    json!({
        "number": course.number(),
        "name": course.name(),
        "prerequisites": prerequisites,
    })
}

/// Renders the whole catalog as a JSON array in course-number order.
#[must_use]
pub fn schedule_json(table: &CourseTable) -> serde_json::Value {
    serde_json::Value::Array(sorted(table).into_iter().map(|c| json!(c)).collect())
}

/// Finds groups of courses whose prerequisites form a cycle.
///
/// Each group is sorted by course number, and the groups themselves are
/// sorted. A course that lists itself as a prerequisite is reported as a
/// group of one.
#[must_use]
pub fn prerequisite_cycles(table: &CourseTable) -> Vec<Vec<CourseNumber>> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for course in table {
        graph.add_node(course.number().as_str());
        for prerequisite in course.prerequisites() {
            graph.add_edge(course.number().as_str(), prerequisite.as_str(), ());
        }
    }

    let mut cycles = Vec::new();

    for component in tarjan_scc(&graph) {
        let is_cycle = component.len() > 1
            || component
                .first()
                .is_some_and(|&node| graph.contains_edge(node, node));
        if !is_cycle {
            continue;
        }

        let mut numbers: Vec<_> = component
            .iter()
            .filter_map(|number| table.search(number).map(|c| c.number().clone()))
            .collect();
        numbers.sort();
        cycles.push(numbers);
    }

    cycles.sort();
    cycles
}
