//! Buffer-level encryption: independent 16-byte blocks with zero padding.

use crate::block::{padded_len, to_block, BLOCK_LEN};
use crate::cipher::Aes128;
use crate::error::CipherError;

impl Aes128 {
    /// Zero-pads `buffer` to a multiple of 16 bytes and encrypts it block by block.
    pub fn encrypt_in_place(&self, buffer: &mut Vec<u8>) {
        buffer.resize(padded_len(buffer.len()), 0);
        for chunk in buffer.chunks_exact_mut(BLOCK_LEN) {
            let encrypted = self.encrypt_block(&to_block(chunk));
            chunk.copy_from_slice(&encrypted);
        }
    }

    /// Encrypts an arbitrary-length buffer; the result is `ceil(len / 16) * 16` bytes.
    pub fn encrypt_buffer(&self, input: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(padded_len(input.len()));
        output.extend_from_slice(input);
        self.encrypt_in_place(&mut output);
        output
    }

    /// Decrypts `buffer` in place. Its length must be a multiple of 16.
    pub fn decrypt_in_place(&self, buffer: &mut [u8]) -> Result<(), CipherError> {
        if buffer.len() % BLOCK_LEN != 0 {
            return Err(CipherError::InvalidBlockLength { len: buffer.len() });
        }
        for chunk in buffer.chunks_exact_mut(BLOCK_LEN) {
            let decrypted = self.decrypt_block(&to_block(chunk));
            chunk.copy_from_slice(&decrypted);
        }
        Ok(())
    }

    /// Decrypts a whole number of blocks, returning a buffer of the same length.
    pub fn decrypt_buffer(&self, input: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut output = input.to_vec();
        self.decrypt_in_place(&mut output)?;
        Ok(output)
    }
}
