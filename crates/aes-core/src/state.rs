//! The 4×4 cipher state.

use crate::block::{Block, BLOCK_LEN};

/// AES state matrix for one block.
///
/// Stored column-major: byte `i` of the block sits at row `i % 4`, column `i / 4`.
/// A state is created per block transform and never shares storage with the
/// caller's buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    cols: [[u8; 4]; 4],
}

impl State {
    /// Loads a block into a fresh state.
    pub fn from_block(block: &Block) -> Self {
        let mut cols = [[0u8; 4]; 4];
        for (i, &byte) in block.iter().enumerate() {
            cols[i / 4][i % 4] = byte;
        }
        Self { cols }
    }

    /// Writes the state back out in block order.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_LEN];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.cols[i / 4][i % 4];
        }
        block
    }

    /// Byte at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cols[col][row]
    }

    /// Overwrites the byte at `row`, `col`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cols[col][row] = value;
    }

    /// Copies out one row.
    pub fn row(&self, row: usize) -> [u8; 4] {
        std::array::from_fn(|col| self.cols[col][row])
    }

    /// Replaces one row.
    pub fn set_row(&mut self, row: usize, values: [u8; 4]) {
        for (col, value) in values.into_iter().enumerate() {
            self.cols[col][row] = value;
        }
    }

    /// Copies out one column.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        self.cols[col]
    }

    /// Replaces one column.
    #[inline]
    pub fn set_column(&mut self, col: usize, values: [u8; 4]) {
        self.cols[col] = values;
    }

    /// Iterates mutably over all sixteen bytes.
    pub fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.cols.iter_mut().flatten()
    }
}
