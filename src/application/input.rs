//! Line-oriented input with validation and re-prompting

use crate::cli::output::{INVALID_INTEGER, INVALID_NAME};
use crate::domain::EmployeeName;
use crate::error::{Result, StaffrollError};
use std::io::{BufRead, Write};

/// Parse a whole line as a base-10 integer, ignoring surrounding whitespace
pub fn parse_integer(line: &str) -> Result<i64> {
    line.trim()
        .parse::<i64>()
        .map_err(|_| StaffrollError::InvalidInteger(line.to_string()))
}

/// Reads answers from `input` and writes prompts and complaints to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Write text without a trailing newline and flush it
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write a line of text
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Read one line with its line ending removed.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, which neither validator
    /// accepts, so such a line is re-prompted like any other bad answer.
    pub fn read_line(&mut self) -> Result<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(StaffrollError::InputClosed);
        }

        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Ask until the answer is an integer
    pub fn prompt_integer(&mut self, prompt: &str) -> Result<i64> {
        loop {
            self.write(prompt)?;
            let line = self.read_line()?;
            match parse_integer(&line) {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!(input = %line, "rejected integer input");
                    self.say(INVALID_INTEGER)?;
                }
            }
        }
    }

    /// Ask until the answer is a valid employee name
    pub fn prompt_name(&mut self, max_len: usize) -> Result<EmployeeName> {
        loop {
            self.write("Enter employee name: ")?;
            let line = self.read_line()?;
            match EmployeeName::parse(&line, max_len) {
                Ok(name) => return Ok(name),
                Err(_) => {
                    tracing::debug!(input = %line, "rejected name input");
                    self.say(INVALID_NAME)?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
