//! Line-oriented byte reader
//!
//! [`LineReader`] pulls one line at a time from any [`Read`] source without
//! knowing the line length in advance. The line buffer starts at
//! [`INITIAL_LINE_CAPACITY`] bytes and doubles whenever it fills, so reading
//! is amortized linear in the line length. Once a line is complete the buffer
//! is shrunk to its exact length before being handed to the caller.
//!
//! Bytes are pulled one at a time; wrap unbuffered sources such as files in a
//! [`std::io::BufReader`].

use crate::error::{IoError, IoResult};
use std::io::{ErrorKind, Read};

/// Initial line buffer capacity in bytes
pub const INITIAL_LINE_CAPACITY: usize = 128;

/// Outcome of a single [`LineReader::read_line`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line with at least one byte, without its `\n`.
    ///
    /// The last line of a stream is returned this way whether or not it ends
    /// in a newline.
    Text(Vec<u8>),
    /// A line consisting only of `\n`
    Empty,
    /// The stream was exhausted before any byte was read
    EndOfStream,
}

impl Line {
    /// Line content, or `None` at end of stream.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Text(bytes) => Some(bytes),
            Self::Empty => Some(Vec::new()),
            Self::EndOfStream => None,
        }
    }

    /// True at end of stream
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }
}

/// Reads `\n`-terminated lines from a byte stream
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    exhausted: bool,
    lines_read: usize,
}

impl<R: Read> LineReader<R> {
    /// Wrap a byte source
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            exhausted: false,
            lines_read: 0,
        }
    }

    /// Read the next line.
    ///
    /// Once [`Line::EndOfStream`] has been returned, or a final line without
    /// a trailing newline has been read, the underlying source is not read
    /// again and every further call returns [`Line::EndOfStream`].
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Read`] if the source fails (interrupted reads are
    /// retried), or an allocation failure if the line buffer cannot grow.
    /// Bytes of a partially read line are discarded on error.
    pub fn read_line(&mut self) -> IoResult<Line> {
        if self.exhausted {
            return Ok(Line::EndOfStream);
        }

        let mut buf = Vec::new();
        buf.try_reserve_exact(INITIAL_LINE_CAPACITY)
            .map_err(georegion_core::Error::from)?;

        loop {
            match self.next_byte()? {
                Some(b'\n') => break,
                None => {
                    self.exhausted = true;
                    break;
                }
                Some(byte) => {
                    if buf.len() == buf.capacity() {
                        buf.try_reserve_exact(buf.capacity())
                            .map_err(georegion_core::Error::from)?;
                    }
                    buf.push(byte);
                }
            }
        }

        if buf.is_empty() {
            if self.exhausted {
                return Ok(Line::EndOfStream);
            }
            self.lines_read += 1;
            return Ok(Line::Empty);
        }

        buf.shrink_to_fit();
        self.lines_read += 1;
        Ok(Line::Text(buf))
    }

    /// True once the source has reported end of stream
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of lines returned so far (empty lines included)
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Unwrap the byte source
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn next_byte(&mut self) -> IoResult<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(IoError::Read(e)),
            }
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = IoResult<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_line() {
            Ok(line) => line.into_bytes().map(Ok),
            Err(e) => {
                self.exhausted = true;
                Some(Err(e))
            }
        }
    }
}
