//! AES round transformations over a [`State`].
//!
//! Each transform takes a [`Direction`]; `Decrypt` selects the inverse
//! operation so encryption and decryption share one code path per step.

use crate::block::Block;
use crate::gf256;
use crate::sbox::{inv_sbox, sbox};
use crate::state::State;

/// Which way a transform runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Forward cipher.
    Encrypt,
    /// Inverse cipher.
    Decrypt,
}

/// MixColumns matrix.
const MDS: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// InvMixColumns matrix.
const INV_MDS: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes (or its inverse) to every byte of the state.
#[inline]
pub fn sub_bytes(state: &mut State, direction: Direction) {
    let lookup = match direction {
        Direction::Encrypt => sbox,
        Direction::Decrypt => inv_sbox,
    };
    for byte in state.bytes_mut() {
        *byte = lookup(*byte);
    }
}

/// Rotates row `r` by `r` positions: left when encrypting, right when decrypting.
#[inline]
pub fn shift_rows(state: &mut State, direction: Direction) {
    for r in 1..4 {
        let mut row = state.row(r);
        match direction {
            Direction::Encrypt => row.rotate_left(r),
            Direction::Decrypt => row.rotate_right(r),
        }
        state.set_row(r, row);
    }
}

/// Multiplies every column by the MDS matrix (or its inverse) in GF(256).
#[inline]
pub fn mix_columns(state: &mut State, direction: Direction) {
    let matrix = match direction {
        Direction::Encrypt => &MDS,
        Direction::Decrypt => &INV_MDS,
    };
    for col in 0..4 {
        let input = state.column(col);
        let output = std::array::from_fn(|row| {
            matrix[row]
                .iter()
                .zip(input.iter())
                .fold(0u8, |acc, (&m, &x)| acc ^ gf256::mul(m, x))
        });
        state.set_column(col, output);
    }
}

/// XORs a round key into the state; byte `[row][col]` pairs with key byte `4 * col + row`.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Block) {
    for col in 0..4 {
        for row in 0..4 {
            let mixed = state.get(row, col) ^ round_key[4 * col + row];
            state.set(row, col, mixed);
        }
    }
}
