//! Compression-then-encryption pipeline.
//!
//! [`Pipeline::compress`] seeds an adaptive dictionary from the input, writes the
//! dictionary as text followed by the variable-width codes, packs the bits into
//! bytes and encrypts them with AES-128 in independent zero-padded blocks.
//! [`Pipeline::decompress`] undoes each step.
//!
//! The output carries no length field, version tag or integrity check: the
//! closing brace of the dictionary text is the only structural anchor (see
//! [`split_header`]).

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bitstream;
mod config;
mod error;
mod header;
mod pipeline;

pub use crate::config::{PipelineConfig, DEFAULT_KEY};
pub use crate::error::PipelineError;
pub use crate::header::split_header;
pub use crate::pipeline::{Inspection, Pipeline};

pub use aes_core::Aes128Key;
