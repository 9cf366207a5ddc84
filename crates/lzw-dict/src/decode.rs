//! Dictionary decoder.

use tracing::debug;

use crate::bits::BitBuffer;
use crate::dictionary::DecodeDictionary;
use crate::error::CodecError;
use crate::space::CodeSpace;
use crate::END_MARKER;

/// Decodes a payload produced by [`encode`](crate::encode) back into bytes.
///
/// Decoding stops at the end marker or when fewer bits remain than the current
/// width; either way the pending string is flushed. A code the dictionary does
/// not hold yet stands for the previous string followed by its own first byte.
pub fn decode(bits: &BitBuffer, mut dictionary: DecodeDictionary) -> Result<Vec<u8>, CodecError> {
    let mut space = CodeSpace::new(dictionary.len());
    let mut reader = bits.reader();
    let mut output = Vec::new();

    let first = match reader.read_code(space.width()) {
        Some(code) if code != END_MARKER => code,
        _ => return Ok(output),
    };
    let mut previous = dictionary
        .get(first)
        .filter(|string| !string.is_empty())
        .ok_or(CodecError::InvalidFirstCode { code: first })?
        .to_vec();

    loop {
        let reserved = space.grow();
        let code = match reader.read_code(space.width()) {
            Some(code) if code != END_MARKER => code,
            _ => break,
        };

        let next = match dictionary.get(code) {
            Some(string) => string.to_vec(),
            None => {
                let mut synthesized = previous.clone();
                synthesized.push(previous[0]);
                synthesized
            }
        };

        output.extend_from_slice(&previous);
        let mut entry = std::mem::replace(&mut previous, next);
        entry.push(previous[0]);
        let assigned = dictionary.push(entry);
        debug_assert_eq!(assigned, reserved);
    }

    output.extend_from_slice(&previous);
    debug!(
        output_len = output.len(),
        dictionary_len = dictionary.len(),
        final_width = space.width(),
        unread_bits = reader.remaining(),
        "decoded payload"
    );
    Ok(output)
}
