//! Output sinks
//!
//! A sink receives fully rendered lines. Write failures are returned as-is;
//! nothing here retries or recovers.

use std::io::{self, Write};

use thiserror::Error;

/// Errors that can occur while writing rendered output
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Destination for rendered lines
pub trait Sink {
    /// Write `line` followed by a line terminator
    fn write_line(&mut self, line: &str) -> Result<(), SinkError>;
}

/// Sink writing to the process's standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        writeln!(lock, "{line}")?;
        lock.flush()?;
        Ok(())
    }
}

/// Sink over any [`io::Write`]
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink that keeps every line in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take the collected lines, leaving the sink empty
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        (**self).write_line(line)
    }
}
