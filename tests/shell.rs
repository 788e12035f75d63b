//! End-to-end tests driving the interactive planner with scripted input.

use std::{io::Write, path::Path};

use course_planner::{Config, Shell};
use tempfile::NamedTempFile;

const CATALOG: &str = "\
CSCI100,Introduction to Computer Science
CSCI101,Introduction to Programming in C++,CSCI100
CSCI200,Data Structures,CSCI101
MATH201,Discrete Mathematics
CSCI300,Introduction to Algorithms,CSCI200,MATH201
CSCI301,Advanced Programming in C++,CSCI101
CSCI350,Operating Systems,CSCI300
CSCI400,Large Software Development,CSCI301,CSCI350
";

fn course_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn run_script(script: &str) -> String {
    let mut shell = Shell::new(script.as_bytes(), Vec::new(), Config::default());
    shell.run().unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

fn load_line(path: &Path) -> String {
    format!("1\n{}\n", path.display())
}

#[test]
fn load_then_show_course() {
    let file = course_file("CS101,Intro to CS\nCS201,Data Structures,CS101\n");

    let output = run_script(&format!("{}3\ncs201\n9\n", load_line(file.path())));

    assert!(output.contains("Data loaded successfully\n"));
    assert!(output.contains("What course do you want to know about? "));
    assert!(output.contains("CS201, Data Structures\nPrerequisites: CS101\n"));
}

#[test]
fn menu_choice_and_course_on_one_line() {
    let file = course_file("CS101,Intro to CS\nCS201,Data Structures,CS101\n");

    let output = run_script(&format!("{}3 cs201\n9\n", load_line(file.path())));

    assert!(!output.contains("is not a valid option"));
    assert!(output.contains("CS201, Data Structures\nPrerequisites: CS101\n"));
}

#[test]
fn load_then_print_sorted_list() {
    let file = course_file("CS201,Data Structures,CS101\nCS101,Intro to CS\n");

    let output = run_script(&format!("{}2\n9\n", load_line(file.path())));

    let first = output.find("CS101, Intro to CS").unwrap();
    let second = output.find("CS201, Data Structures").unwrap();
    assert!(output.contains("Here is a sample schedule:\n\n"));
    assert!(first < second);
}

#[test]
fn full_catalog_prints_in_order() {
    let file = course_file(CATALOG);

    let output = run_script(&format!("{}2\n9\n", load_line(file.path())));

    let start = output.find("Here is a sample schedule:\n\n").unwrap();
    let listed: Vec<_> = output[start..]
        .lines()
        .skip(2)
        .take_while(|line| !line.is_empty())
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(
        listed,
        [
            "CSCI100", "CSCI101", "CSCI200", "CSCI300", "CSCI301", "CSCI350", "CSCI400",
            "MATH201"
        ]
    );
}

#[test]
fn unknown_course_is_not_found() {
    let file = course_file(CATALOG);

    let output = run_script(&format!("{}3\nCSCI999\n9\n", load_line(file.path())));

    assert!(output.contains("Course not found.\n"));
}

#[test]
fn reload_forgets_previous_courses() {
    let first = course_file("OLD101,Old Course\n");
    let second = course_file("NEW101,New Course\n");

    let output = run_script(&format!(
        "{}{}3\nOLD101\n3\nNEW101\n9\n",
        load_line(first.path()),
        load_line(second.path())
    ));

    assert_eq!(output.matches("Data loaded successfully").count(), 2);
    assert!(output.contains("Course not found.\n"));
    assert!(output.contains("NEW101, New Course\n"));
}

#[test]
fn malformed_file_is_reported_and_not_loaded() {
    let file = course_file("CS101,Intro to CS\nCS201\n");

    let output = run_script(&format!("{}2\n9\n", load_line(file.path())));

    assert!(output.contains("Error: Invalid course format on line 2: CS201\n"));
    assert!(!output.contains("Data loaded successfully"));
    assert!(output.contains("Please load data first\n"));
}

#[test]
fn unknown_prerequisite_is_reported_and_not_loaded() {
    let file = course_file("CS201,Data Structures,CS101\n");

    let output = run_script(&format!("{}3\nCS201\n9\n", load_line(file.path())));

    assert!(output.contains("Error: Invalid prerequisite CS101 for course CS201 on line 1\n"));
    assert!(output.contains("Please load data first\n"));
}

#[test]
fn failed_reload_keeps_previous_catalog() {
    let good = course_file("CS101,Intro to CS\n");
    let bad = course_file("CS999,Broken,NOPE\n");

    let output = run_script(&format!(
        "{}{}3\nCS101\n9\n",
        load_line(good.path()),
        load_line(bad.path())
    ));

    assert!(output.contains("Error: Invalid prerequisite NOPE"));
    assert!(output.contains("CS101, Intro to CS\n"));
}

#[test]
fn catalog_larger_than_capacity_is_rejected() {
    let content: String = (0..20).map(|i| format!("C{i:03},Course {i}\n")).collect();
    let file = course_file(&content);

    let output = run_script(&format!("{}9\n", load_line(file.path())));

    assert!(output.contains("Error: Course table is full (capacity 17)\n"));
}

#[test]
fn preloaded_file_is_available_immediately() {
    let file = course_file(CATALOG);

    let mut shell = Shell::new(&b"3\nmath201\n9\n"[..], Vec::new(), Config::default())
        .with_preload(file.path().to_path_buf());
    shell.run().unwrap();

    assert_eq!(shell.table().len(), 8);
    let output = String::from_utf8(shell.into_output()).unwrap();
    let welcome = output.find("Welcome to the course planner.").unwrap();
    let loaded = output.find("Data loaded successfully").unwrap();
    assert!(welcome < loaded);
    assert!(output.contains("MATH201, Discrete Mathematics\n"));
}
