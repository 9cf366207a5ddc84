//! Single-bit streams over [`std::io`] readers and writers.
//!
//! Bits are packed most-significant first, matching the byte packing used
//! everywhere else in the pipeline.

use std::io::{self, Read, Write};

/// Writes one bit at a time to an underlying writer.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    inner: W,
    current: u8,
    filled: u8,
}

impl<W: Write> BitWriter<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            current: 0,
            filled: 0,
        }
    }

    /// Appends one bit; a byte is written out every eighth bit.
    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.current = (self.current << 1) | u8::from(bit);
        self.filled += 1;
        if self.filled == 8 {
            self.inner.write_all(&[self.current])?;
            self.current = 0;
            self.filled = 0;
        }
        Ok(())
    }

    /// Appends every bit of `bytes`.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        for &byte in bytes {
            for shift in (0..8).rev() {
                self.write_bit((byte >> shift) & 1 == 1)?;
            }
        }
        Ok(())
    }

    /// Zero-pads a partial byte, flushes, and returns the writer.
    pub fn finish(mut self) -> io::Result<W> {
        while self.filled != 0 {
            self.write_bit(false)?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Reads one bit at a time from an underlying reader.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    inner: R,
    current: u8,
    remaining: u8,
}

impl<R: Read> BitReader<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            current: 0,
            remaining: 0,
        }
    }

    /// Next bit, or `None` at end of stream.
    pub fn read_bit(&mut self) -> io::Result<Option<bool>> {
        if self.remaining == 0 {
            let mut byte = [0u8; 1];
            match self.inner.read_exact(&mut byte) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(err) => return Err(err),
            }
            self.current = byte[0];
            self.remaining = 8;
        }
        self.remaining -= 1;
        Ok(Some((self.current >> self.remaining) & 1 == 1))
    }
}

impl<R: Read> Iterator for BitReader<R> {
    type Item = io::Result<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_bit().transpose()
    }
}
