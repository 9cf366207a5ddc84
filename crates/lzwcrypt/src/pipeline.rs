//! Compress/decompress orchestration.

use std::io::{Read, Write};

use aes_core::Aes128;
use lzw_dict::{build_dictionary, decode, encode, BitBuffer, EncodeDictionary};
use tracing::debug;

use crate::bitstream::{BitReader, BitWriter};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::header::split_header;

/// Compression followed by encryption, bound to one key.
#[derive(Clone, Debug)]
pub struct Pipeline {
    cipher: Aes128,
}

/// What [`Pipeline::inspect`] recovers from a compressed stream without decoding it.
#[derive(Clone, Debug)]
pub struct Inspection {
    /// Seed dictionary carried in the header.
    pub dictionary: EncodeDictionary,
    /// Length of the header text in bytes.
    pub header_len: usize,
    /// Bits following the header, including trailing padding.
    pub payload_bits: usize,
}

impl Pipeline {
    /// Builds a pipeline, expanding the configured key once.
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            cipher: Aes128::new(&config.key),
        }
    }

    /// Compresses and encrypts `input`.
    ///
    /// The result is a whole number of 16-byte blocks; read most-significant
    /// bit first it is the output bitstream.
    pub fn compress(&self, input: &[u8]) -> Result<Vec<u8>, PipelineError> {
        let seeds = build_dictionary(input);
        let header = seeds.to_text()?;

        let mut bits = BitBuffer::new();
        bits.push_bytes(header.as_bytes());
        let header_bits = bits.len();
        let summary = encode(input, seeds, &mut bits)?;

        let mut packed = bits.into_bytes();
        let packed_len = packed.len();
        self.cipher.encrypt_in_place(&mut packed);

        debug!(
            input_len = input.len(),
            header_bits,
            payload_bits = packed_len * 8 - header_bits,
            codes = summary.codes,
            encrypted_len = packed.len(),
            "compressed"
        );
        Ok(packed)
    }

    /// Compresses `input` and writes the encrypted result bit by bit.
    pub fn compress_to<W: Write>(
        &self,
        input: &[u8],
        output: &mut BitWriter<W>,
    ) -> Result<(), PipelineError> {
        let encrypted = self.compress(input)?;
        output.write_bytes(&encrypted)?;
        Ok(())
    }

    /// Reads all of `input` and compresses it into `output`.
    pub fn compress_stream<R: Read, W: Write>(
        &self,
        mut input: R,
        output: &mut BitWriter<W>,
    ) -> Result<(), PipelineError> {
        let mut data = Vec::new();
        input.read_to_end(&mut data)?;
        self.compress_to(&data, output)
    }

    /// Decrypts and decompresses data produced by [`Pipeline::compress`].
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, PipelineError> {
        let (seeds, payload) = self.open(data)?;
        let dictionary = seeds.invert()?;
        let output = decode(&payload, dictionary)?;
        debug!(
            encrypted_len = data.len(),
            output_len = output.len(),
            "decompressed"
        );
        Ok(output)
    }

    /// Drains `input` to its end-of-stream signal and decompresses the bits.
    pub fn decompress_from<R: Read>(
        &self,
        input: &mut BitReader<R>,
    ) -> Result<Vec<u8>, PipelineError> {
        let mut bits = BitBuffer::new();
        while let Some(bit) = input.read_bit()? {
            bits.push(bit);
        }
        self.decompress(&bits.into_bytes())
    }

    /// Decrypts `data` and parses its header without decoding the payload.
    pub fn inspect(&self, data: &[u8]) -> Result<Inspection, PipelineError> {
        let plain = self.cipher.decrypt_buffer(data)?;
        let (header, payload) = split_header(&plain)?;
        Ok(Inspection {
            dictionary: EncodeDictionary::from_text(header)?,
            header_len: header.len(),
            payload_bits: payload.len() * 8,
        })
    }

    fn open(&self, data: &[u8]) -> Result<(EncodeDictionary, BitBuffer), PipelineError> {
        let plain = self.cipher.decrypt_buffer(data)?;
        let (header, payload) = split_header(&plain)?;
        let seeds = EncodeDictionary::from_text(header)?;
        debug!(
            header_len = header.len(),
            seeds = seeds.len(),
            payload_len = payload.len(),
            "parsed header"
        );
        Ok((seeds, BitBuffer::from_bytes(payload)))
    }
}
