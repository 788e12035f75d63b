//! The interactive, menu-driven course planner.
//!
//! The [`Shell`] owns its [`CourseTable`] and talks to the user through any
//! buffered reader and writer, so it can be driven from stdin/stdout or from a
//! script.

use std::{
    collections::VecDeque,
    fmt,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::instrument;

use crate::{
    domain::{Config, CourseNumber},
    report,
    storage::{self, CourseTable},
};

/// A menu entry chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Load a course file into the table.
    Load,
    /// Print every course in course-number order.
    PrintList,
    /// Print a single course and its prerequisites.
    PrintCourse,
    /// Leave the planner.
    Exit,
    /// Anything else, kept as typed.
    Invalid(String),
}

impl FromStr for Choice {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(1) => Self::Load,
            Ok(2) => Self::PrintList,
            Ok(3) => Self::PrintCourse,
            Ok(9) => Self::Exit,
            _ => Self::Invalid(s.to_string()),
        })
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => f.write_str("1"),
            Self::PrintList => f.write_str("2"),
            Self::PrintCourse => f.write_str("3"),
            Self::Exit => f.write_str("9"),
            Self::Invalid(s) => f.write_str(s),
        }
    }
}

/// The interactive planner loop.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: Config,
    table: CourseTable,
    preload: Option<PathBuf>,
    /// Words already read from the input but not yet consumed.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with an empty table sized from the configuration.
    pub fn new(input: R, output: W, config: Config) -> Self {
        let table = CourseTable::with_capacity(config.capacity());
        Self {
            input,
            output,
            config,
            table,
            preload: None,
            pending: VecDeque::new(),
        }
    }

    /// Loads the given file right after the greeting, before the first menu.
    #[must_use]
    pub fn with_preload(mut self, path: PathBuf) -> Self {
        self.preload = Some(path);
        self
    }

    /// The courses currently loaded.
    pub const fn table(&self) -> &CourseTable {
        &self.table
    }

    /// Consumes the shell, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the user exits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails. Load
    /// failures and unknown courses are reported to the user and the loop
    /// continues.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the course planner.")?;

        if let Some(path) = self.preload.take() {
            self.load(&path)?;
        }

        loop {
            self.print_menu()?;
            let Some(token) = self.read_token()? else {
                writeln!(self.output)?;
                break;
            };

            let choice: Choice = token.parse().unwrap_or_else(|e| match e {});
            tracing::debug!("Menu choice: {choice:?}");

            match choice {
                Choice::Load => self.prompt_load()?,
                Choice::PrintList => self.print_list()?,
                Choice::PrintCourse => self.prompt_course()?,
                Choice::Exit => break,
                Choice::Invalid(_) => writeln!(self.output, "{choice} is not a valid option.")?,
            }
        }

        writeln!(self.output, "Thank you for using the course planner!")?;
        self.output.flush()
    }

    /// Loads a course file, replacing the table only if the load succeeds.
    ///
    /// The outcome is reported to the user.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing output fails.
    pub fn load(&mut self, path: &Path) -> io::Result<()> {
        match storage::load_into(&mut self.table, path, &self.config) {
            Ok(count) => {
                tracing::info!("Loaded {count} courses from {}", path.display());
                writeln!(self.output, "Data loaded successfully")
            }
            Err(e) => {
                tracing::debug!("Load of {} failed: {e}", path.display());
                writeln!(self.output, "Error: {e}")
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "1. Load Data Structure.")?;
        writeln!(self.output, "2. Print Course List.")?;
        writeln!(self.output, "3. Print Course.")?;
        writeln!(self.output, "9. Exit")?;
        writeln!(self.output)?;
        self.prompt("What would you like to do? ")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Reads the next whitespace-separated word. `None` at end of input.
    ///
    /// Several answers may be given on one line (`3 CSCI100`); the extra words
    /// are kept for the following prompts. Bytes that are not valid UTF-8 are
    /// replaced rather than treated as a read failure.
    fn read_token(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        while self.pending.is_empty() {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&buf)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.pending.pop_front())
    }

    fn prompt_load(&mut self) -> io::Result<()> {
        self.prompt("Enter filename: ")?;
        match self.read_token()? {
            Some(filename) => self.load(Path::new(&filename)),
            None => Ok(()),
        }
    }

    fn print_list(&mut self) -> io::Result<()> {
        if self.table.is_empty() {
            return writeln!(self.output, "Please load data first");
        }
        report::write_schedule(&mut self.output, &self.table)
    }

    fn prompt_course(&mut self) -> io::Result<()> {
        if self.table.is_empty() {
            return writeln!(self.output, "Please load data first");
        }

        self.prompt("What course do you want to know about? ")?;
        let Some(answer) = self.read_token()? else {
            return Ok(());
        };

        let found = CourseNumber::new(answer)
            .ok()
            .and_then(|number| report::find(&self.table, &number.to_uppercase()));

        match found {
            Some(course) => report::write_course(&mut self.output, course),
            None => writeln!(self.output, "Course not found."),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("1", Choice::Load; "load")]
    #[test_case(" 2 ", Choice::PrintList; "print list with whitespace")]
    #[test_case("3", Choice::PrintCourse; "print course")]
    #[test_case("9", Choice::Exit; "exit")]
    #[test_case("09", Choice::Exit; "leading zero")]
    #[test_case("4", Choice::Invalid("4".to_string()); "unknown number")]
    #[test_case("abc", Choice::Invalid("abc".to_string()); "not a number")]
    fn parses_choice(input: &str, expected: Choice) {
        assert_eq!(input.parse::<Choice>().unwrap(), expected);
    }

    fn run(input: &str) -> String {
        let mut shell = Shell::new(input.as_bytes(), Vec::new(), Config::default());
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn greets_and_exits() {
        let output = run("9\n");

        assert!(output.starts_with("Welcome to the course planner.\n"));
        assert!(output.contains("1. Load Data Structure."));
        assert!(output.contains("What would you like to do? "));
        assert!(output.ends_with("Thank you for using the course planner!\n"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let output = run("");
        assert!(output.ends_with("Thank you for using the course planner!\n"));
    }

    #[test]
    fn invalid_option_redisplays_menu() {
        let output = run("7\n9\n");

        assert!(output.contains("7 is not a valid option.\n"));
        assert_eq!(output.matches("2. Print Course List.").count(), 2);
    }

    #[test]
    fn non_numeric_option_is_invalid() {
        let output = run("hello\n9\n");
        assert!(output.contains("hello is not a valid option.\n"));
    }

    #[test]
    fn invalid_utf8_is_an_invalid_option() {
        let mut shell = Shell::new(&b"\xff\n9\n"[..], Vec::new(), Config::default());
        shell.run().unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();

        assert!(output.contains("\u{FFFD} is not a valid option.\n"));
        assert!(output.ends_with("Thank you for using the course planner!\n"));
    }

    #[test]
    fn invalid_utf8_filename_reports_error_and_continues() {
        let mut shell = Shell::new(&b"1\n\xfe.csv\n9\n"[..], Vec::new(), Config::default());
        shell.run().unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();

        assert!(output.contains("Error: File not found"));
        assert!(output.ends_with("Thank you for using the course planner!\n"));
    }

    #[test]
    fn several_answers_on_one_line() {
        let output = run("7 8\n9\n");

        assert!(output.contains("7 is not a valid option.\n"));
        assert!(output.contains("8 is not a valid option.\n"));
        assert!(output.ends_with("Thank you for using the course planner!\n"));
    }

    #[test]
    fn print_before_load_asks_for_data() {
        let output = run("2\n3\n9\n");
        assert_eq!(output.matches("Please load data first\n").count(), 2);
    }

    #[test]
    fn load_missing_file_reports_error_and_continues() {
        let output = run("1\n/definitely/not/here.csv\n9\n");

        assert!(output.contains("Enter filename: "));
        assert!(output.contains("Error: File not found"));
        assert!(output.ends_with("Thank you for using the course planner!\n"));
    }
}
