//! Growable bit sequence, packed most-significant bit first.

use bitvec::prelude::*;

use crate::Code;

/// Ordered sequence of bits shared by the dictionary header and the code payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: BitVec<u8, Msb0>,
}

impl BitBuffer {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unpacks bytes, most-significant bit first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bits: BitVec::from_slice(bytes),
        }
    }

    /// Number of bits held.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no bits are held.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Appends one bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Appends every bit of `bytes`, most-significant bit first.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.bits.extend_from_bitslice(bytes.view_bits::<Msb0>());
    }

    /// Appends the low `width` bits of `code`, most-significant bit first.
    pub fn push_code(&mut self, code: Code, width: u8) {
        for shift in (0..u32::from(width)).rev() {
            self.bits.push((code >> shift) & 1 == 1);
        }
    }

    /// Appends zero bits until the length is a multiple of eight.
    pub fn pad_to_byte(&mut self) {
        while self.bits.len() % 8 != 0 {
            self.bits.push(false);
        }
    }

    /// Pads to a byte boundary and packs eight bits per byte.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.pad_to_byte();
        self.bits.into_vec()
    }

    /// Iterates over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Cursor for reading fixed-width codes from the start.
    pub fn reader(&self) -> CodeReader<'_> {
        CodeReader {
            bits: &self.bits,
            pos: 0,
        }
    }
}

impl FromIterator<bool> for BitBuffer {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

/// Reads codes of a caller-chosen width from a [`BitBuffer`].
#[derive(Debug)]
pub struct CodeReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
}

impl CodeReader<'_> {
    /// Reads the next `width` bits as a big-endian integer.
    ///
    /// Returns `None` once fewer than `width` bits remain; the leftover bits are
    /// consumed so later reads also report the end.
    pub fn read_code(&mut self, width: u8) -> Option<Code> {
        let end = self.pos + usize::from(width);
        if end > self.bits.len() {
            self.pos = self.bits.len();
            return None;
        }
        let code = self.bits[self.pos..end]
            .iter()
            .by_vals()
            .fold(0, |acc: Code, bit| (acc << 1) | Code::from(bit));
        self.pos = end;
        Some(code)
    }

    /// Bits not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }
}
