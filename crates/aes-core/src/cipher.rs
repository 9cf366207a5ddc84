//! AES-128 key schedule and block encryption/decryption.

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys, SCHEDULE_LEN};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes, Direction};
use crate::sbox::sbox;
use crate::state::State;

const ROUNDS: usize = 10;

/// Round constants, indexed by `i / 4` for schedule word `i`; entry 0 is never used.
const RCON: [u8; 11] = [0x8d, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut schedule = [0u8; SCHEDULE_LEN];
    schedule[..16].copy_from_slice(&key.0);

    for i in 4..SCHEDULE_LEN / 4 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&schedule[(i - 1) * 4..i * 4]);
        if i % 4 == 0 {
            for byte in word.iter_mut() {
                *byte = sbox(*byte);
            }
            word.rotate_left(1);
            word[0] ^= RCON[i / 4];
        }
        for (j, byte) in word.iter().enumerate() {
            schedule[i * 4 + j] = schedule[(i - 4) * 4 + j] ^ byte;
        }
    }

    RoundKeys::from_schedule(&schedule)
}

/// Runs the full ten-round transform on `state` in the given direction.
pub fn cipher(state: &mut State, round_keys: &RoundKeys, direction: Direction) {
    match direction {
        Direction::Encrypt => {
            add_round_key(state, round_keys.get(0));
            for round in 1..ROUNDS {
                sub_bytes(state, direction);
                shift_rows(state, direction);
                mix_columns(state, direction);
                add_round_key(state, round_keys.get(round));
            }
            sub_bytes(state, direction);
            shift_rows(state, direction);
            add_round_key(state, round_keys.get(ROUNDS));
        }
        Direction::Decrypt => {
            add_round_key(state, round_keys.get(ROUNDS));
            for round in (1..ROUNDS).rev() {
                shift_rows(state, direction);
                sub_bytes(state, direction);
                add_round_key(state, round_keys.get(round));
                mix_columns(state, direction);
            }
            shift_rows(state, direction);
            sub_bytes(state, direction);
            add_round_key(state, round_keys.get(0));
        }
    }
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);
    cipher(&mut state, round_keys, Direction::Encrypt);
    state.to_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);
    cipher(&mut state, round_keys, Direction::Decrypt);
    state.to_block()
}

/// AES-128 bound to one key.
///
/// The schedule is expanded once in [`Aes128::new`] and only read afterwards, so
/// a single instance can be shared freely; every call works on its own [`State`].
#[derive(Clone, Debug)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` and returns a ready cipher.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// The expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }
}
