//! Line-based console I/O
//!
//! The game talks to the player only through [`Console`], so the whole loop
//! can run against a scripted console in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Read-line-in, write-line-out boundary
pub trait Console {
    /// Show `prompt` and read one line
    ///
    /// Returns `Ok(None)` once input is exhausted. The returned line has
    /// surrounding whitespace removed.
    ///
    /// # Errors
    /// Returns an I/O error if reading or flushing fails.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write one line of output
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Write several lines in order
    ///
    /// # Errors
    /// Returns the first I/O error encountered.
    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }
}

/// Console backed by the process's stdin and stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}: ")?;
        stdout.flush()?;

        let mut input = Vec::new();
        if io::stdin().lock().read_until(b'\n', &mut input)? == 0 {
            // Keep the shell prompt off the game's last line
            writeln!(stdout)?;
            return Ok(None);
        }

        Ok(Some(decode_line(&input)))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }
}

/// Turn raw input bytes into a trimmed line
///
/// Invalid UTF-8 becomes U+FFFD so the word validation can reject it like any
/// other non-ASCII input.
fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}

/// Console that replays canned input and records everything written
///
/// Prompts are recorded in the output as `"{prompt}: "` lines.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    #[must_use]
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything written so far, one entry per line
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Output joined with newlines
    #[must_use]
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Input lines not yet consumed
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push(format!("{prompt}: "));
        Ok(self.input.pop_front().map(|line| line.trim().to_string()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
