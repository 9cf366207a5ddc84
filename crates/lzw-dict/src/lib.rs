//! Adaptive dictionary codec in the LZW family.
//!
//! The dictionary is seeded with every byte that occurs in the input plus a
//! reserved end-of-input entry at code 0. Codes are written most-significant
//! bit first with a width that grows with the dictionary; an all-zero code
//! terminates the stream.
//!
//! Encoder and decoder share [`CodeSpace`] so both sides widen codes at
//! exactly the same dictionary sizes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bits;
mod decode;
mod dictionary;
mod encode;
mod error;
mod space;
mod symbol;

pub use crate::bits::{BitBuffer, CodeReader};
pub use crate::decode::decode;
pub use crate::dictionary::{build_dictionary, DecodeDictionary, EncodeDictionary};
pub use crate::encode::{encode, EncodeSummary};
pub use crate::error::CodecError;
pub use crate::space::{initial_width, CodeSpace};
pub use crate::symbol::Symbol;

/// Integer assigned to a dictionary string.
pub type Code = u32;

/// Code reserved for the end-of-input symbol; written as all zero bits it ends a stream.
pub const END_MARKER: Code = 0;
