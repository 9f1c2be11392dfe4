//! Console I/O
//!
//! Line-oriented prompts over any `BufRead` / `Write` pair.
//! The binary uses stdin/stdout; tests drive it from in-memory buffers.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::error::{CadastroError, Result};

/// Prompting front end for the menu and the operations
pub struct Console<R, W> {
    input: R,
    output: W,

    /// Invalid answers tolerated per prompt (`None` = unbounded)
    max_retries: Option<usize>,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_retries: None,
        }
    }

    pub fn with_max_retries(mut self, max_retries: Option<usize>) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Print one line
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print an empty line
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line
    ///
    /// Returns `InputClosed` once the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(CadastroError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer
    ///
    /// `Validation` and `Parse` errors from `parse` are shown to the user and
    /// the question is repeated; any other error is returned.
    pub fn ask<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> Result<T>,
    {
        let mut attempts = 0;
        loop {
            let answer = self.read_line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    self.say(e.user_message())?;
                    attempts += 1;
                    if self.max_retries.is_some_and(|max| attempts >= max) {
                        tracing::debug!("Retries exhausted at prompt {:?}", prompt);
                        return Err(CadastroError::RetriesExhausted {
                            prompt: prompt.trim().to_string(),
                            attempts,
                        });
                    }
                }
                Err(other) => return Err(other),
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
