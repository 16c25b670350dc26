//! # Line Reader
//!
//! Forward-only line source for the importer.
//! Tracks the 1-based line number of the last line returned so errors can
//! point at the offending line.
//!
//! ## Example
//!
//! ```rust
//! use byu_import::reader::LineReader;
//!
//! let mut reader = LineReader::new("1 2 3\n4 5 6\n".as_bytes());
//! let line = reader.expect_line("header").unwrap();
//! assert_eq!((line.number, line.text), (1, "1 2 3"));
//! ```

use crate::error::{ByuError, ByuResult};
use std::io::BufRead;

/// A line borrowed from the reader's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Line content without the line terminator.
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Splits the line on runs of whitespace.
    pub fn tokens(&self) -> std::str::SplitWhitespace<'a> {
        self.text.split_whitespace()
    }
}

/// Buffered line reader with line counting.
pub struct LineReader<R> {
    /// Underlying source.
    inner: R,
    /// Reused line buffer.
    buf: Vec<u8>,
    /// Number of lines read so far.
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps a buffered source.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            line: 0,
        }
    }

    /// Reads the next line, or `None` at end of input.
    ///
    /// Lines that are not valid UTF-8 fail with `InvalidFormat`.
    pub fn next_line(&mut self) -> ByuResult<Option<Line<'_>>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        let text = std::str::from_utf8(&self.buf)
            .map_err(|_| ByuError::invalid_format(self.line, "line is not valid UTF-8"))?
            .trim_end_matches(&['\n', '\r'][..]);
        Ok(Some(Line {
            number: self.line,
            text,
        }))
    }

    /// Reads the next line, failing with `InvalidFormat` at end of input.
    ///
    /// `expected` names what the missing line should have held.
    pub fn expect_line(&mut self, expected: &str) -> ByuResult<Line<'_>> {
        let next = self.line + 1;
        self.next_line()?.ok_or_else(|| {
            ByuError::invalid_format(next, format!("unexpected end of input, expected {expected}"))
        })
    }
}
