//! Encode- and decode-direction dictionaries.

use indexmap::IndexMap;

use crate::error::CodecError;
use crate::symbol::{from_key, to_key, Symbol};
use crate::{Code, END_MARKER};

/// Symbol string → code, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeDictionary {
    entries: IndexMap<Vec<Symbol>, Code>,
}

/// Seeds a dictionary from `input`: the end-of-input symbol at code 0, then each
/// distinct byte in order of first appearance from code 1.
pub fn build_dictionary(input: &[u8]) -> EncodeDictionary {
    let mut dictionary = EncodeDictionary::with_end_symbol();
    for &byte in input {
        let seed = [Symbol::Byte(byte)];
        if !dictionary.contains(&seed) {
            dictionary.insert(seed.to_vec());
        }
    }
    dictionary
}

impl EncodeDictionary {
    /// Dictionary holding only the end-of-input entry.
    pub fn with_end_symbol() -> Self {
        let mut entries = IndexMap::new();
        entries.insert(vec![Symbol::EndOfInput], END_MARKER);
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Code assigned to `string`.
    pub fn code(&self, string: &[Symbol]) -> Option<Code> {
        self.entries.get(string).copied()
    }

    /// Whether `string` has a code.
    pub fn contains(&self, string: &[Symbol]) -> bool {
        self.entries.contains_key(string)
    }

    /// Appends `string` under the next free code and returns that code.
    /// A string that is already present keeps its code.
    pub fn insert(&mut self, string: Vec<Symbol>) -> Code {
        let next = self.entries.len() as Code;
        *self.entries.entry(string).or_insert(next)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[Symbol], Code)> + '_ {
        self.entries.iter().map(|(string, &code)| (string.as_slice(), code))
    }

    /// Serializes to a brace-delimited object of quoted keys and integer codes.
    ///
    /// Bytes become the matching `U+0000..=U+00FF` character and the
    /// end-of-input symbol becomes `U+FFFF`.
    pub fn to_text(&self) -> Result<String, CodecError> {
        let text: IndexMap<String, Code> = self
            .entries
            .iter()
            .map(|(string, &code)| (to_key(string), code))
            .collect();
        Ok(serde_json::to_string(&text)?)
    }

    /// Parses text produced by [`EncodeDictionary::to_text`], keeping entry order.
    pub fn from_text(text: &[u8]) -> Result<Self, CodecError> {
        let parsed: IndexMap<String, Code> = serde_json::from_slice(text)?;
        let entries = parsed
            .into_iter()
            .map(|(key, code)| match from_key(&key) {
                Some(string) => Ok((string, code)),
                None => Err(CodecError::InvalidKey { key }),
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;
        Ok(Self { entries })
    }

    /// Builds the code → bytes view used for decoding.
    ///
    /// Codes must be exactly `0..len`, code 0 must be the lone end-of-input
    /// symbol, and every other entry must be a non-empty byte string.
    pub fn invert(&self) -> Result<DecodeDictionary, CodecError> {
        let len = self.entries.len();
        let mut slots: Vec<Option<Vec<u8>>> = vec![None; len];
        for (string, &code) in &self.entries {
            let slot = slots
                .get_mut(code as usize)
                .filter(|slot| slot.is_none())
                .ok_or(CodecError::NonDenseCodes { code, len })?;
            let bytes = if code == END_MARKER {
                if string.as_slice() != [Symbol::EndOfInput] {
                    return Err(CodecError::InvalidEntry { code });
                }
                Vec::new()
            } else {
                string
                    .iter()
                    .map(|symbol| match symbol {
                        Symbol::Byte(byte) => Some(*byte),
                        Symbol::EndOfInput => None,
                    })
                    .collect::<Option<Vec<u8>>>()
                    .filter(|bytes| !bytes.is_empty())
                    .ok_or(CodecError::InvalidEntry { code })?
            };
            *slot = Some(bytes);
        }
        if slots.is_empty() {
            return Err(CodecError::MissingEndSymbol);
        }
        // Every code was in range and unique, so each slot is filled.
        let entries = slots.into_iter().flatten().collect();
        Ok(DecodeDictionary { entries })
    }
}

/// Code → byte string. Index 0 is the end-of-input entry and holds no bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeDictionary {
    entries: Vec<Vec<u8>>,
}

impl DecodeDictionary {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes for `code`.
    pub fn get(&self, code: Code) -> Option<&[u8]> {
        self.entries.get(code as usize).map(Vec::as_slice)
    }

    /// Appends an entry under the next free code and returns that code.
    pub fn push(&mut self, bytes: Vec<u8>) -> Code {
        self.entries.push(bytes);
        (self.entries.len() - 1) as Code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(string: &[u8]) -> Vec<Symbol> {
        string.iter().copied().map(Symbol::Byte).collect()
    }

    #[test]
    fn seeds_in_first_seen_order() {
        let dictionary = build_dictionary(b"banana");
        let entries: Vec<_> = dictionary.iter().map(|(s, c)| (s.to_vec(), c)).collect();
        assert_eq!(
            entries,
            vec![
                (vec![Symbol::EndOfInput], 0),
                (bytes(b"b"), 1),
                (bytes(b"a"), 2),
                (bytes(b"n"), 3),
            ]
        );
    }

    #[test]
    fn empty_input_seeds_only_the_end_symbol() {
        let dictionary = build_dictionary(b"");
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.code(&[Symbol::EndOfInput]), Some(END_MARKER));
    }

    #[test]
    fn insert_appends_dense_codes() {
        let mut dictionary = build_dictionary(b"ab");
        assert_eq!(dictionary.insert(bytes(b"ab")), 3);
        assert_eq!(dictionary.insert(bytes(b"ba")), 4);
        assert_eq!(dictionary.insert(bytes(b"ab")), 3);
        assert_eq!(dictionary.len(), 5);
        assert!(dictionary.contains(&bytes(b"ba")));
        assert!(!dictionary.contains(&bytes(b"aa")));
    }

    #[test]
    fn text_round_trip_keeps_order() {
        let input: Vec<u8> = b"}{\"\\ \n".iter().copied().chain((0u8..=255).rev()).collect();
        let dictionary = build_dictionary(&input);
        let text = dictionary.to_text().expect("serialize");
        assert!(text.starts_with('{') && text.ends_with('}'));
        let parsed = EncodeDictionary::from_text(text.as_bytes()).expect("parse");
        let original: Vec<_> = dictionary.iter().collect();
        let restored: Vec<_> = parsed.iter().collect();
        assert_eq!(original, restored);
    }

    #[test]
    fn text_form_is_readable() {
        let dictionary = build_dictionary(b"ab");
        assert_eq!(dictionary.to_text().expect("serialize"), "{\"\u{FFFF}\":0,\"a\":1,\"b\":2}");
    }

    #[test]
    fn from_text_rejects_garbage() {
        assert!(matches!(
            EncodeDictionary::from_text(b"{\"a\":1"),
            Err(CodecError::MalformedDictionary(_))
        ));
        assert!(matches!(
            EncodeDictionary::from_text(b"[1, 2]"),
            Err(CodecError::MalformedDictionary(_))
        ));
        assert!(matches!(
            EncodeDictionary::from_text("{\"\u{0101}\":1}".as_bytes()),
            Err(CodecError::InvalidKey { .. })
        ));
    }

    #[test]
    fn invert_maps_codes_to_bytes() {
        let decode = build_dictionary(b"xyz").invert().expect("valid");
        assert_eq!(decode.len(), 4);
        assert_eq!(decode.get(0), Some(&[][..]));
        assert_eq!(decode.get(1), Some(&b"x"[..]));
        assert_eq!(decode.get(3), Some(&b"z"[..]));
        assert_eq!(decode.get(4), None);
    }

    #[test]
    fn invert_accepts_any_entry_order() {
        let text = "{\"b\":2,\"\u{FFFF}\":0,\"a\":1}";
        let decode = EncodeDictionary::from_text(text.as_bytes())
            .expect("parse")
            .invert()
            .expect("dense");
        assert_eq!(decode.get(1), Some(&b"a"[..]));
        assert_eq!(decode.get(2), Some(&b"b"[..]));
    }

    #[test]
    fn invert_rejects_holes_and_bad_entries() {
        let holes = EncodeDictionary::from_text("{\"\u{FFFF}\":0,\"a\":2}".as_bytes()).expect("parse");
        assert!(matches!(
            holes.invert(),
            Err(CodecError::NonDenseCodes { code: 2, len: 2 })
        ));

        let repeated = EncodeDictionary::from_text("{\"\u{FFFF}\":0,\"a\":1,\"b\":1}".as_bytes())
            .expect("parse");
        assert!(matches!(
            repeated.invert(),
            Err(CodecError::NonDenseCodes { code: 1, .. })
        ));

        let no_end = EncodeDictionary::from_text(b"{\"a\":0}").expect("parse");
        assert!(matches!(no_end.invert(), Err(CodecError::InvalidEntry { code: 0 })));

        let end_inside = EncodeDictionary::from_text("{\"\u{FFFF}\":0,\"a\u{FFFF}\":1}".as_bytes())
            .expect("parse");
        assert!(matches!(end_inside.invert(), Err(CodecError::InvalidEntry { code: 1 })));

        let empty = EncodeDictionary::from_text(b"{}").expect("parse");
        assert!(matches!(empty.invert(), Err(CodecError::MissingEndSymbol)));
    }

    #[test]
    fn decode_push_assigns_next_code() {
        let mut decode = build_dictionary(b"a").invert().expect("valid");
        assert_eq!(decode.push(b"aa".to_vec()), 2);
        assert_eq!(decode.get(2), Some(&b"aa"[..]));
    }
}
