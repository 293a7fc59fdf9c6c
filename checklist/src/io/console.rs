//! Line-oriented console used by the menus.
//!
//! Generic over the reader and writer so sessions can be scripted in tests.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{Context, Result};

/// ANSI erase-display plus cursor-home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

pub struct Console<R, W> {
    input: R,
    output: W,
    clear: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio(clear: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), clear)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear: bool) -> Self {
        Self {
            input,
            output,
            clear,
        }
    }

    /// Start a fresh screen. A no-op when clearing is disabled.
    pub fn clear_screen(&mut self) -> Result<()> {
        if self.clear {
            self.output
                .write_all(CLEAR_SCREEN.as_bytes())
                .context("clear screen")?;
        }
        Ok(())
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").context("write console output")
    }

    /// Show `message` and read one line.
    ///
    /// Returns `None` once input is exhausted. The trailing newline is removed.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}").context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("read console input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    /// Wait for the operator to press Enter.
    pub fn pause(&mut self, message: &str) -> Result<()> {
        self.prompt(message)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
