// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Glyph budget estimation.
//!
//! Any payload fits any carrier: glyphs that find no carrier character to
//! follow are appended as a tail. The tail is a visible run of zero-width
//! characters at the end of the text though, so callers may want to pick a
//! carrier long enough to hold the whole payload inline.

use crate::stego::bitio::BITS_PER_UNIT;
use crate::stego::error::StegoError;
use crate::stego::payload;

/// How a payload's glyphs would be distributed over a carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityInfo {
    /// Payload characters, one 16-bit unit each.
    pub payload_units: usize,
    /// Total glyphs emitted (16 per unit).
    pub glyphs: usize,
    /// Glyphs placed directly after a carrier character.
    pub inline_glyphs: usize,
    /// Glyphs appended after the last carrier character.
    pub tail_glyphs: usize,
}

impl CapacityInfo {
    /// True if no glyphs spill into the tail.
    pub fn fits_inline(&self) -> bool {
        self.tail_glyphs == 0
    }
}

/// Compute the glyph distribution for embedding `payload` in `carrier`.
///
/// # Errors
/// [`StegoError::CodepointOutOfRange`] if the payload cannot be encoded.
pub fn capacity_info(carrier: &str, payload: &str) -> Result<CapacityInfo, StegoError> {
    let payload_units = payload::unit_count(payload)?;
    let glyphs = payload_units * BITS_PER_UNIT;
    let inline_glyphs = glyphs.min(carrier.chars().count());
    Ok(CapacityInfo {
        payload_units,
        glyphs,
        inline_glyphs,
        tail_glyphs: glyphs - inline_glyphs,
    })
}

/// Number of payload characters `carrier` can hold without a glyph tail.
pub fn inline_capacity(carrier: &str) -> usize {
    carrier.chars().count() / BITS_PER_UNIT
}

/// True if `payload` fits in `carrier` without a glyph tail.
pub fn payload_fits_inline(carrier: &str, payload: &str) -> Result<bool, StegoError> {
    capacity_info(carrier, payload).map(|info| info.fits_inline())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_carrier_spills_into_tail() {
        let info = capacity_info("AB", "H").unwrap();
        assert_eq!(
            info,
            CapacityInfo { payload_units: 1, glyphs: 16, inline_glyphs: 2, tail_glyphs: 14 }
        );
        assert!(!info.fits_inline());
    }

    #[test]
    fn long_carrier_holds_everything() {
        let carrier = "x".repeat(40);
        let info = capacity_info(&carrier, "hi").unwrap();
        assert_eq!(info.glyphs, 32);
        assert_eq!(info.inline_glyphs, 32);
        assert!(info.fits_inline());
    }

    #[test]
    fn counts_chars_not_bytes() {
        // 9 chars, 27 bytes.
        let info = capacity_info("我对你的爱，加了蜜", "A").unwrap();
        assert_eq!(info.inline_glyphs, 9);
        assert_eq!(info.tail_glyphs, 7);
    }

    #[test]
    fn inline_capacity_rounds_down() {
        assert_eq!(inline_capacity(""), 0);
        assert_eq!(inline_capacity(&"a".repeat(15)), 0);
        assert_eq!(inline_capacity(&"a".repeat(16)), 1);
        assert_eq!(inline_capacity(&"a".repeat(47)), 2);
    }

    #[test]
    fn fits_inline_agrees_with_capacity() {
        let carrier = "a".repeat(32);
        assert!(payload_fits_inline(&carrier, "ab").unwrap());
        assert!(!payload_fits_inline(&carrier, "abc").unwrap());
        assert!(payload_fits_inline("", "").unwrap());
    }

    #[test]
    fn rejects_non_bmp_payload() {
        assert!(matches!(
            capacity_info("carrier", "🔐"),
            Err(StegoError::CodepointOutOfRange { index: 0, .. })
        ));
    }
}
