//! Line-oriented console over any reader/writer pair.
//!
//! The REPL talks to a [`Console`] instead of stdin/stdout directly, so tests
//! can script a whole session with a `Cursor` and capture the output in a `Vec<u8>`.

use std::fmt::Display;
use std::io::{BufRead, Write};
use warehouse::error::{Result, WarehouseError};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line without its line terminator. End of input is `InputClosed`.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(WarehouseError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    pub fn ask(&mut self, prompt: impl Display) -> Result<String> {
        self.say(prompt)?;
        self.read_line()
    }

    /// Reads a whole number; `None` when the line is not one.
    pub fn read_number(&mut self) -> Result<Option<i64>> {
        let line = self.read_line()?;
        Ok(line.trim().parse().ok())
    }

    /// Asks a yes/no question until the answer starts with `y` or `n`.
    pub fn confirm(&mut self, message: impl Display) -> Result<bool> {
        loop {
            let answer = self.ask(format!("{} (y/n)", message))?;
            let answer = answer.trim().to_lowercase();
            if answer.starts_with('y') {
                return Ok(true);
            }
            if answer.starts_with('n') {
                return Ok(false);
            }
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
