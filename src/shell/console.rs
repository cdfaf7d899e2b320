use crate::Result;
use anyhow::Context;
use std::fmt::Display;
use std::io::{BufRead, StdinLock, Stdout, Write};

/// A prompt/response console. Prompts and notices go to the writer and answers are read a line
/// at a time from the reader.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// A console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `message` without a trailing newline and reads one line of input. The line ending
    /// is removed. Returns `None` when the input is exhausted.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.writer, "{message}").context("Unable to write to the console")?;
        self.writer.flush().context("Unable to flush the console")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Unable to read from the console")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Writes `message` followed by a newline.
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.writer, "{message}").context("Unable to write to the console")
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}
