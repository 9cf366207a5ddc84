//! Codec error type.

use thiserror::Error;

use crate::symbol::Symbol;
use crate::Code;

/// Codec failures. Truncated payloads and not-yet-assigned codes are part of
/// normal decoding and never show up here.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Dictionary text is not a brace-delimited object of string keys and integer codes.
    #[error("malformed dictionary text: {0}")]
    MalformedDictionary(#[from] serde_json::Error),

    /// A dictionary key holds a character outside the symbol alphabet.
    #[error("dictionary key {key:?} contains a character outside the symbol alphabet")]
    InvalidKey {
        /// The offending key as it appeared in the text.
        key: String,
    },

    /// Codes are not exactly `0..len`.
    #[error("dictionary code {code} is out of range or repeated for {len} entries")]
    NonDenseCodes {
        /// The offending code.
        code: Code,
        /// Number of dictionary entries.
        len: usize,
    },

    /// An entry cannot be expressed as a decode string.
    #[error("dictionary entry {code} is not a valid decode string")]
    InvalidEntry {
        /// Code of the offending entry.
        code: Code,
    },

    /// The dictionary has no entry at code 0.
    #[error("dictionary has no end-of-input entry")]
    MissingEndSymbol,

    /// Encoding met a symbol the dictionary was not seeded with.
    #[error("symbol {symbol:?} is not in the dictionary")]
    UnknownSymbol {
        /// The unseeded symbol.
        symbol: Symbol,
    },

    /// The first code of a payload has no dictionary entry.
    #[error("first code {code} is not in the dictionary")]
    InvalidFirstCode {
        /// The code that was read.
        code: Code,
    },
}
