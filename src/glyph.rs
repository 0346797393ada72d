// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Bit ↔ glyph mapping.
//!
//! Each payload bit is carried by one of two reserved zero-width characters:
//!
//! ```text
//! 0  ->  U+200B  ZERO WIDTH SPACE
//! 1  ->  U+200C  ZERO WIDTH NON-JOINER
//! ```
//!
//! The table is a compile-time constant shared by encoder and decoder. No
//! other character is ever emitted or accepted as a bit carrier.

use crate::stego::error::StegoError;

/// Zero-width glyph carrying a `0` bit.
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Zero-width glyph carrying a `1` bit.
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';

/// Glyph table indexed by bit value.
const GLYPHS: [char; 2] = [ZERO_WIDTH_SPACE, ZERO_WIDTH_NON_JOINER];

/// A single payload bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Bit at position `shift` of `value` (0 = least significant).
    ///
    /// Positions past the top bit read as `Zero`.
    #[inline]
    pub fn of(value: u16, shift: u32) -> Self {
        match value.checked_shr(shift) {
            Some(v) if v & 1 == 1 => Bit::One,
            _ => Bit::Zero,
        }
    }

    /// Numeric value, 0 or 1.
    #[inline]
    pub fn value(self) -> u16 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

/// Map a bit to its zero-width glyph.
#[inline]
pub fn bit_to_glyph(bit: Bit) -> char {
    GLYPHS[bit.value() as usize]
}

/// Map a zero-width glyph back to its bit.
///
/// # Errors
/// [`StegoError::UnknownGlyph`] if `glyph` is not one of the two reserved
/// characters. Callers that pre-filter with [`is_reserved_glyph`] never
/// see this.
#[inline]
pub fn glyph_to_bit(glyph: char) -> Result<Bit, StegoError> {
    match glyph {
        ZERO_WIDTH_SPACE => Ok(Bit::Zero),
        ZERO_WIDTH_NON_JOINER => Ok(Bit::One),
        other => Err(StegoError::UnknownGlyph(other)),
    }
}

/// Returns `true` for the two characters reserved as bit carriers.
#[inline]
pub fn is_reserved_glyph(ch: char) -> bool {
    ch == ZERO_WIDTH_SPACE || ch == ZERO_WIDTH_NON_JOINER
}
