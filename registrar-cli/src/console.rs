//! Line-oriented console over any reader/writer pair
//!
//! The binary wraps stdin/stdout; tests drive it with an in-memory script.
//! End of input surfaces as `None` from every read.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::ClientError;

pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line without its terminator
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print a titled numbered menu and read the choice
    pub fn choose(&mut self, title: &str, options: &[&str]) -> io::Result<Option<String>> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", title)?;
        for option in options {
            writeln!(self.output, "{}", option)?;
        }

        Ok(self
            .read_line("Enter your choice: ")?
            .map(|choice| choice.trim().to_string()))
    }

    pub fn println(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Heading followed by pretty-printed JSON
    pub fn print_json<T: Serialize + ?Sized>(&mut self, heading: &str, value: &T) -> io::Result<()> {
        writeln!(self.output, "{}", heading)?;
        serde_json::to_writer_pretty(&mut self.output, value)?;
        writeln!(self.output)
    }

    pub fn print_error(&mut self, heading: &str, err: &ClientError) -> io::Result<()> {
        writeln!(self.output, "{} {}", heading, err)
    }

    /// Print either the value under `heading` or the failure under `error_heading`
    pub fn report<T: Serialize>(
        &mut self,
        heading: &str,
        error_heading: &str,
        result: Result<T, ClientError>,
    ) -> io::Result<()> {
        match result {
            Ok(value) => self.print_json(heading, &value),
            Err(err) => self.print_error(error_heading, &err),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
