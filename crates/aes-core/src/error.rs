//! Cipher error type.

use thiserror::Error;

/// Errors raised by buffer-level cipher operations and key construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Decryption input that is not a whole number of 16-byte blocks.
    #[error("invalid block length: {len} bytes is not a multiple of 16")]
    InvalidBlockLength {
        /// Length of the rejected buffer.
        len: usize,
    },
    /// Key material that is not exactly 16 bytes.
    #[error("AES-128 key must be 16 bytes, got {len}")]
    InvalidKeyLength {
        /// Length of the rejected key material.
        len: usize,
    },
}
