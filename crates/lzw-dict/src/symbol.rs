//! Input symbols and their textual form.

/// Character that stands for [`Symbol::EndOfInput`] in dictionary text.
///
/// Bytes map to `U+0000..=U+00FF`, so a noncharacter outside that range can
/// never collide with one.
pub(crate) const END_OF_INPUT_CHAR: char = '\u{FFFF}';

/// One dictionary symbol: a byte, or the distinguished end-of-input marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// Terminates the input; only ever the last symbol of a string.
    EndOfInput,
    /// A literal input byte.
    Byte(u8),
}

impl Symbol {
    pub(crate) fn to_char(self) -> char {
        match self {
            Symbol::EndOfInput => END_OF_INPUT_CHAR,
            Symbol::Byte(byte) => char::from(byte),
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Self> {
        if c == END_OF_INPUT_CHAR {
            return Some(Symbol::EndOfInput);
        }
        u8::try_from(c).ok().map(Symbol::Byte)
    }
}

/// Renders a symbol string as dictionary key text.
pub(crate) fn to_key(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.to_char()).collect()
}

/// Parses dictionary key text back into symbols.
pub(crate) fn from_key(key: &str) -> Option<Vec<Symbol>> {
    key.chars().map(Symbol::from_char).collect()
}
