use std::io::Cursor;

use lzw_dict::{build_dictionary, encode, BitBuffer};
use lzwcrypt::bitstream::{BitReader, BitWriter};
use lzwcrypt::{Aes128Key, Pipeline, PipelineConfig, PipelineError};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn default_pipeline() -> Pipeline {
    Pipeline::new(&PipelineConfig::default())
}

fn assert_round_trip(pipeline: &Pipeline, input: &[u8]) {
    let packed = pipeline.compress(input).expect("compress");
    assert_eq!(packed.len() % 16, 0);
    let output = pipeline.decompress(&packed).expect("decompress");
    assert_eq!(output, input);
}

#[test]
fn short_inputs_round_trip() {
    let pipeline = default_pipeline();
    for input in [&b""[..], b"x", b"xy", b"xx", b"}", b"\"}", b"{\"}\":1}"] {
        assert_round_trip(&pipeline, input);
    }
}

#[test]
fn every_byte_value_round_trips() {
    let pipeline = default_pipeline();
    let input: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).collect();
    assert_round_trip(&pipeline, &input);

    let inspection = pipeline
        .inspect(&pipeline.compress(&input).expect("compress"))
        .expect("inspect");
    assert_eq!(inspection.dictionary.len(), 257);
}

#[test]
fn repetitive_input_shrinks() {
    let pipeline = default_pipeline();
    let repetitive = vec![b'A'; 1000];
    let packed = pipeline.compress(&repetitive).expect("compress");
    assert!(packed.len() < 100, "packed to {} bytes", packed.len());
    assert_eq!(pipeline.inspect(&packed).expect("inspect").dictionary.len(), 2);
    assert_round_trip(&pipeline, &repetitive);
}

#[test]
fn repetition_grows_the_dictionary_less_than_variety() {
    let repetitive = vec![b'A'; 1000];
    let varied: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();

    let grown = |input: &[u8]| {
        let mut bits = BitBuffer::new();
        encode(input, build_dictionary(input), &mut bits)
            .expect("encode")
            .dictionary_len
    };
    let repetitive_len = grown(&repetitive);
    let varied_len = grown(&varied);
    assert!(
        repetitive_len * 4 < varied_len,
        "{repetitive_len} vs {varied_len} entries"
    );

    let pipeline = default_pipeline();
    assert_round_trip(&pipeline, &repetitive);
    assert_round_trip(&pipeline, &varied);
}

#[test]
fn text_round_trips() {
    let pipeline = default_pipeline();
    let text = "TOBEORNOTTOBEORTOBEORNOT#".repeat(40);
    assert_round_trip(&pipeline, text.as_bytes());
    let latin = "caf\u{e9} na\u{ef}ve r\u{e9}sum\u{e9} \u{fffd}".repeat(25);
    assert_round_trip(&pipeline, latin.as_bytes());
}

#[test]
fn random_inputs_round_trip() {
    let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
    let pipeline = default_pipeline();
    for _ in 0..8 {
        let len = rng.gen_range(0..6000);
        let mut input = vec![0u8; len];
        rng.fill_bytes(&mut input);
        assert_round_trip(&pipeline, &input);
    }
}

#[test]
fn narrow_alphabets_round_trip() {
    let mut rng = ChaCha20Rng::from_seed([8u8; 32]);
    let pipeline = default_pipeline();
    for alphabet in [1u8, 2, 3, 4, 7, 16] {
        let input: Vec<u8> = (0..4096).map(|_| b'a' + rng.gen_range(0..alphabet)).collect();
        assert_round_trip(&pipeline, &input);
    }
}

#[test]
fn keys_are_independent() {
    let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
    let input = b"the same words under different keys".repeat(4);
    let mut outputs = Vec::new();
    for _ in 0..4 {
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);
        let pipeline = Pipeline::new(&PipelineConfig::new(Aes128Key::from(key)));
        assert_round_trip(&pipeline, &input);
        outputs.push(pipeline.compress(&input).expect("compress"));
    }
    outputs.dedup();
    assert_eq!(outputs.len(), 4);
}

#[test]
fn hex_configured_key_matches_raw_key() {
    let raw = PipelineConfig::new(Aes128Key::from(*b"QuOkAs RuLe2017!"));
    let parsed = PipelineConfig::from_key_hex("51754f6b41732052754c653230313721").expect("hex");
    assert_eq!(raw, parsed);
    assert_eq!(raw, PipelineConfig::default());
}

#[test]
fn stream_api_matches_buffer_api() {
    let pipeline = default_pipeline();
    let input = b"streams and buffers agree, streams and buffers agree";

    let mut writer = BitWriter::new(Vec::new());
    pipeline.compress_to(input, &mut writer).expect("compress");
    let streamed = writer.finish().expect("finish");
    assert_eq!(streamed, pipeline.compress(input).expect("compress"));

    let mut reader = BitReader::new(Cursor::new(streamed));
    assert_eq!(pipeline.decompress_from(&mut reader).expect("decompress"), input);
}

#[test]
fn corrupted_streams_fail_or_differ() {
    let pipeline = default_pipeline();
    let input = b"flip a bit and see what survives".repeat(3);
    let packed = pipeline.compress(&input).expect("compress");
    for index in [0, 5, 17, 40] {
        let mut corrupted = packed.clone();
        corrupted[index] ^= 0x01;
        if let Ok(output) = pipeline.decompress(&corrupted) {
            assert_ne!(output, input);
        }
    }
}

#[test]
fn truncated_ciphertext_is_rejected() {
    let pipeline = default_pipeline();
    let packed = pipeline.compress(b"truncate me").expect("compress");
    let err = pipeline.decompress(&packed[..packed.len() - 3]).unwrap_err();
    assert!(matches!(err, PipelineError::Cipher(_)));
    assert!(matches!(
        pipeline.decompress(&[]).unwrap_err(),
        PipelineError::MissingHeader
    ));
}
