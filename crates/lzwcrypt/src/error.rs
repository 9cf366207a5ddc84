//! Pipeline error type.

use std::io;

use aes_core::CipherError;
use lzw_dict::CodecError;
use thiserror::Error;

/// Pipeline failures. Every one of them is a format or precondition violation;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Key material or block length rejected by the cipher.
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// Dictionary text or payload rejected by the codec.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The decrypted data does not open with a dictionary header.
    #[error("decrypted data does not start with a dictionary header")]
    MissingHeader,

    /// The dictionary header has no balanced closing delimiter.
    #[error("dictionary header has no closing delimiter")]
    MissingHeaderTerminator,

    /// Key given as hex could not be decoded.
    #[error("invalid key hex: {0}")]
    KeyHex(#[from] hex::FromHexError),

    /// Reading or writing a bit stream failed.
    #[error("bit stream I/O failed: {0}")]
    Io(#[from] io::Error),
}
