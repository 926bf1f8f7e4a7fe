//! Output sinks for generated table bodies
//!
//! The key abstraction is the `TableSink` trait, which separates row
//! generation from the destination the rows land in. A sink receives text
//! and can optionally be closed; writing after close is an error.
//!
//! Implementations:
//! - `WriterSink`: adapts any `std::io::Write` destination (files, buffers)
//! - `MemorySink`: records writes in memory (testing, WASM callers)

use std::io::Write;

use crate::utils::error::{FormatError, FormatResult};

/// Trait for destinations that receive generated table bodies
///
/// Sinks are supplied by the caller; the formatter never creates one and
/// only closes when explicitly instructed to.
pub trait TableSink {
    /// Write a chunk of text to the destination
    fn write_text(&mut self, text: &str) -> FormatResult<()>;

    /// Close the destination
    ///
    /// After a successful close, both writing and closing again fail.
    fn close(&mut self) -> FormatResult<()>;
}

/// Sink adapter over any `std::io::Write` destination
pub struct WriterSink<W: Write> {
    writer: W,
    closed: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            closed: false,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<W: Write> TableSink for WriterSink<W> {
    fn write_text(&mut self, text: &str) -> FormatResult<()> {
        if self.closed {
            return Err(FormatError::sink_write("sink is closed"));
        }
        self.writer
            .write_all(text.as_bytes())
            .map_err(|e| FormatError::sink_write(e.to_string()))
    }

    fn close(&mut self) -> FormatResult<()> {
        if self.closed {
            return Err(FormatError::sink_close("sink is already closed"));
        }
        // the sink counts as closed even if the flush below fails; the
        // write itself has already completed
        self.closed = true;
        self.writer
            .flush()
            .map_err(|e| FormatError::sink_close(e.to_string()))
    }
}

/// In-memory sink recording every write (for tests and WASM callers)
#[derive(Debug, Default)]
pub struct MemorySink {
    writes: Vec<String>,
    closed: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chunks received so far, one entry per `write_text` call
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// All received text, concatenated
    pub fn contents(&self) -> String {
        self.writes.concat()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl TableSink for MemorySink {
    fn write_text(&mut self, text: &str) -> FormatResult<()> {
        if self.closed {
            return Err(FormatError::sink_write("sink is closed"));
        }
        self.writes.push(text.to_string());
        Ok(())
    }

    fn close(&mut self) -> FormatResult<()> {
        if self.closed {
            return Err(FormatError::sink_close("sink is already closed"));
        }
        self.closed = true;
        Ok(())
    }
}
