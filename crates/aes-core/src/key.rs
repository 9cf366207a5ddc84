//! Key types for AES-128.

use crate::block::{Block, BLOCK_LEN};
use crate::error::CipherError;

/// Number of round keys in an AES-128 schedule (10 rounds plus whitening).
pub(crate) const ROUND_KEY_COUNT: usize = 11;

/// Total size of the expanded schedule in bytes.
pub const SCHEDULE_LEN: usize = ROUND_KEY_COUNT * BLOCK_LEN;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = CipherError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = value
            .try_into()
            .map_err(|_| CipherError::InvalidKeyLength { len: value.len() })?;
        Ok(Self(bytes))
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Splits a flat 176-byte schedule into round keys.
    pub fn from_schedule(schedule: &[u8; SCHEDULE_LEN]) -> Self {
        Self(std::array::from_fn(|round| {
            let mut key = [0u8; BLOCK_LEN];
            key.copy_from_slice(&schedule[round * BLOCK_LEN..(round + 1) * BLOCK_LEN]);
            key
        }))
    }

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Returns the schedule as one flat 176-byte array.
    pub fn to_schedule(&self) -> [u8; SCHEDULE_LEN] {
        let mut schedule = [0u8; SCHEDULE_LEN];
        for (dst, key) in schedule.chunks_exact_mut(BLOCK_LEN).zip(self.0.iter()) {
            dst.copy_from_slice(key);
        }
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_slice_checks_length() {
        let key = Aes128Key::try_from(&b"QuOkAs RuLe2017!"[..]).expect("16 bytes");
        assert_eq!(&key.0, b"QuOkAs RuLe2017!");
        assert_eq!(
            Aes128Key::try_from(&[0u8; 15][..]),
            Err(CipherError::InvalidKeyLength { len: 15 })
        );
        assert_eq!(
            Aes128Key::try_from(&[0u8; 17][..]),
            Err(CipherError::InvalidKeyLength { len: 17 })
        );
    }

    #[test]
    fn schedule_conversion_is_lossless() {
        let mut schedule = [0u8; SCHEDULE_LEN];
        for (i, byte) in schedule.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let keys = RoundKeys::from_schedule(&schedule);
        assert_eq!(keys.get(0)[0], 0);
        assert_eq!(keys.get(10)[15], 175);
        assert_eq!(keys.to_schedule(), schedule);
    }
}
