//! From-scratch AES-128 used by the `lzwcrypt` pipeline.
//!
//! This crate follows FIPS-197 and provides:
//! - GF(256) multiplication and the forward/inverse S-boxes.
//! - Key schedule for AES-128.
//! - Single-block encryption and decryption over an explicit 4×4 [`State`].
//! - Buffer-level processing: each 16-byte chunk is handled independently and
//!   the last one is zero-padded on encryption.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened. Blocks are not
//! chained, so equal plaintext blocks produce equal ciphertext blocks.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod buffer;
mod cipher;
mod error;
pub mod gf256;
mod key;
pub mod round;
mod sbox;
mod state;

pub use crate::block::{padded_len, Block, BLOCK_LEN};
pub use crate::cipher::{cipher, decrypt_block, encrypt_block, expand_key, Aes128};
pub use crate::error::CipherError;
pub use crate::key::{Aes128Key, RoundKeys, SCHEDULE_LEN};
pub use crate::round::Direction;
pub use crate::sbox::{inv_sbox, sbox};
pub use crate::state::State;
