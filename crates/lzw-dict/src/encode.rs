//! Dictionary encoder.

use std::iter;

use tracing::debug;

use crate::bits::BitBuffer;
use crate::dictionary::EncodeDictionary;
use crate::error::CodecError;
use crate::space::CodeSpace;
use crate::symbol::Symbol;
use crate::END_MARKER;

/// Counters describing one encode pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Codes written, excluding the end marker.
    pub codes: usize,
    /// Dictionary size after the pass.
    pub dictionary_len: usize,
    /// Width of the end marker, which is also the final code width.
    pub final_width: u8,
}

/// Encodes `input` into `out` using a dictionary seeded with every byte of the input.
///
/// The dictionary is consumed because the pass grows it; the caller keeps its
/// own copy of the seeds for the header.
pub fn encode(
    input: &[u8],
    mut dictionary: EncodeDictionary,
    out: &mut BitBuffer,
) -> Result<EncodeSummary, CodecError> {
    let mut space = CodeSpace::new(dictionary.len());
    let mut candidate: Vec<Symbol> = Vec::new();
    let mut codes = 0usize;

    let symbols = input
        .iter()
        .copied()
        .map(Symbol::Byte)
        .chain(iter::once(Symbol::EndOfInput));

    for symbol in symbols {
        candidate.push(symbol);
        if dictionary.contains(&candidate) {
            continue;
        }

        let prefix = &candidate[..candidate.len() - 1];
        let code = dictionary
            .code(prefix)
            .ok_or(CodecError::UnknownSymbol { symbol })?;
        out.push_code(code, space.width());
        codes += 1;

        let reserved = space.grow();
        let entry = std::mem::replace(&mut candidate, vec![symbol]);
        let assigned = dictionary.insert(entry);
        debug_assert_eq!(assigned, reserved);

        if !dictionary.contains(&candidate) {
            return Err(CodecError::UnknownSymbol { symbol });
        }
    }

    out.push_code(END_MARKER, space.width());

    let summary = EncodeSummary {
        codes,
        dictionary_len: dictionary.len(),
        final_width: space.width(),
    };
    debug!(
        input_len = input.len(),
        codes = summary.codes,
        dictionary_len = summary.dictionary_len,
        final_width = summary.final_width,
        "encoded payload"
    );
    Ok(summary)
}
