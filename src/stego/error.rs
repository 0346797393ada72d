// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the zero-width text codec.
//!
//! [`StegoError`] covers all failure modes of encoding and of the strict
//! decode path. The lenient [`decode`](crate::decode) never fails.

use core::fmt;

/// Errors that can occur during zero-width encoding or strict decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// A payload character does not fit in a 16-bit unit (outside the BMP).
    /// `index` is the character position in the payload.
    CodepointOutOfRange { ch: char, index: usize },
    /// A character other than the two reserved glyphs was passed to the
    /// inverse glyph mapping.
    UnknownGlyph(char),
    /// The carrier already contains a reserved zero-width character at the
    /// given character position.
    ReservedGlyphInCarrier { index: usize },
    /// The glyph stream ends in an incomplete 16-bit group.
    TruncatedStream { dangling_bits: usize },
    /// A decoded unit is a lone UTF-16 surrogate and not a valid character.
    InvalidUnit(u16),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodepointOutOfRange { ch, index } => write!(
                f,
                "payload character U+{:04X} at index {index} does not fit in 16 bits",
                *ch as u32
            ),
            Self::UnknownGlyph(ch) => {
                write!(f, "U+{:04X} is not a reserved zero-width glyph", *ch as u32)
            }
            Self::ReservedGlyphInCarrier { index } => {
                write!(f, "carrier contains a reserved zero-width glyph at index {index}")
            }
            Self::TruncatedStream { dangling_bits } => {
                write!(f, "glyph stream ends with {dangling_bits} dangling bits")
            }
            Self::InvalidUnit(unit) => write!(f, "decoded unit 0x{unit:04X} is a lone surrogate"),
        }
    }
}

impl std::error::Error for StegoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = StegoError::CodepointOutOfRange { ch: '\u{1F600}', index: 3 };
        assert_eq!(e.to_string(), "payload character U+1F600 at index 3 does not fit in 16 bits");
        assert_eq!(
            StegoError::UnknownGlyph('x').to_string(),
            "U+0078 is not a reserved zero-width glyph"
        );
        assert_eq!(
            StegoError::TruncatedStream { dangling_bits: 5 }.to_string(),
            "glyph stream ends with 5 dangling bits"
        );
        assert_eq!(
            StegoError::InvalidUnit(0xD800).to_string(),
            "decoded unit 0xD800 is a lone surrogate"
        );
    }
}
