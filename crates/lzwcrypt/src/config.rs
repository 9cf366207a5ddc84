//! Pipeline configuration.

use aes_core::Aes128Key;

use crate::error::PipelineError;

/// Key used when none is configured.
pub const DEFAULT_KEY: [u8; 16] = *b"QuOkAs RuLe2017!";

/// Settings shared by compression and decompression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// AES-128 key for both directions.
    pub key: Aes128Key,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            key: Aes128Key::from(DEFAULT_KEY),
        }
    }
}

impl PipelineConfig {
    /// Configuration with an explicit key.
    pub fn new(key: Aes128Key) -> Self {
        Self { key }
    }

    /// Parses a key given as 32 hex characters.
    pub fn from_key_hex(key_hex: &str) -> Result<Self, PipelineError> {
        let bytes = hex::decode(key_hex.trim())?;
        let key = Aes128Key::try_from(bytes.as_slice())?;
        Ok(Self::new(key))
    }
}
