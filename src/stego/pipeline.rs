// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Zero-width encode/decode pipeline.
//!
//! Encode:
//! 1. Convert each payload character to a 16-bit unit (BMP only)
//! 2. Flatten the units into an MSB-first bit sequence
//! 3. Map bits to zero-width glyphs and interleave them into the carrier
//!
//! Decode runs steps 3 → 1 in reverse, except that glyphs are simply
//! filtered out of the text rather than located by position. A trailing
//! group of fewer than 16 bits cannot form a unit and is dropped.

use crate::stego::bitio::{BitReader, BitWriter};
use crate::stego::error::StegoError;
use crate::stego::interleave;
use crate::stego::payload;

/// Diagnostics collected by [`decode_with_report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Reserved glyphs found in the input.
    pub glyphs: usize,
    /// Complete 16-bit units decoded.
    pub units: usize,
    /// Bits of an incomplete trailing group that were dropped.
    pub dangling_bits: usize,
    /// Surrogate units replaced with U+FFFD.
    pub replaced_units: usize,
}

impl DecodeReport {
    /// True if nothing was dropped or replaced.
    pub fn is_clean(&self) -> bool {
        self.dangling_bits == 0 && self.replaced_units == 0
    }
}

/// Hide `payload` inside `carrier`.
///
/// The carrier must not already contain U+200B or U+200C, otherwise the
/// decoded payload is corrupted. Use [`encode_checked`] to have that
/// verified.
///
/// # Errors
/// [`StegoError::CodepointOutOfRange`] if any payload character is outside
/// the Basic Multilingual Plane. Nothing is produced in that case.
pub fn encode(carrier: &str, payload: &str) -> Result<String, StegoError> {
    let units = payload::encode_units(payload)?;

    let mut writer = BitWriter::with_unit_capacity(units.len());
    for &unit in &units {
        writer.write_unit(unit);
    }
    let bits = writer.finish();

    let encoded = interleave::interleave(carrier, &bits);
    tracing::trace!(
        carrier_chars = carrier.chars().count(),
        glyphs = bits.len(),
        "encoded payload"
    );
    Ok(encoded)
}

/// Like [`encode`], but first verifies the carrier is free of reserved glyphs.
///
/// # Errors
/// - [`StegoError::ReservedGlyphInCarrier`] if the carrier contains U+200B
///   or U+200C.
/// - [`StegoError::CodepointOutOfRange`] as for [`encode`].
pub fn encode_checked(carrier: &str, payload: &str) -> Result<String, StegoError> {
    if let Some(index) = interleave::find_reserved_glyph(carrier) {
        return Err(StegoError::ReservedGlyphInCarrier { index });
    }
    encode(carrier, payload)
}

/// Returns the complete units, the glyph count, and the number of dangling
/// bits dropped.
fn extract_units(encoded: &str) -> (Vec<u16>, usize, usize) {
    let bits = interleave::extract_bits(encoded);
    let mut reader = BitReader::new(&bits);
    let units: Vec<u16> = reader.by_ref().collect();
    let dangling_bits = reader.remaining();
    if dangling_bits > 0 {
        tracing::debug!(
            dangling_bits,
            units = units.len(),
            "dropping incomplete trailing bit group"
        );
    }
    (units, bits.len(), dangling_bits)
}

/// Recover the payload hidden in `encoded`.
///
/// Never fails. Text without reserved glyphs yields an empty string, an
/// incomplete trailing bit group is dropped, and lone surrogate units are
/// replaced with U+FFFD.
pub fn decode(encoded: &str) -> String {
    decode_with_report(encoded).0
}

/// Like [`decode`], also reporting what was dropped or replaced.
pub fn decode_with_report(encoded: &str) -> (String, DecodeReport) {
    let (units, glyphs, dangling_bits) = extract_units(encoded);
    let (text, replaced_units) = payload::decode_units_lossy(&units);
    let report = DecodeReport { glyphs, units: units.len(), dangling_bits, replaced_units };
    (text, report)
}

/// Recover the raw 16-bit units hidden in `encoded`.
///
/// An incomplete trailing bit group is dropped, as in [`decode`]. Surrogate
/// units are returned unchanged.
pub fn decode_units(encoded: &str) -> Vec<u16> {
    extract_units(encoded).0
}

/// Recover the payload, rejecting anything [`decode`] would silently repair.
///
/// # Errors
/// - [`StegoError::TruncatedStream`] if the glyph count is not a multiple
///   of 16.
/// - [`StegoError::InvalidUnit`] if a unit is a lone surrogate.
pub fn decode_strict(encoded: &str) -> Result<String, StegoError> {
    let (units, _, dangling_bits) = extract_units(encoded);
    if dangling_bits > 0 {
        return Err(StegoError::TruncatedStream { dangling_bits });
    }
    payload::decode_units_strict(&units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{ZERO_WIDTH_NON_JOINER as ONE, ZERO_WIDTH_SPACE as ZERO};

    fn glyphs_for(bits: &str) -> String {
        bits.chars()
            .map(|b| if b == '1' { ONE } else { ZERO })
            .collect()
    }

    #[test]
    fn known_answer_ab_h() {
        // 'H' = 72 = 0000000001001000
        let g: Vec<char> = glyphs_for("0000000001001000").chars().collect();
        let mut expected = String::from("A");
        expected.push(g[0]);
        expected.push('B');
        expected.extend(&g[1..]);

        let encoded = encode("AB", "H").unwrap();
        assert_eq!(encoded, expected);
        assert_eq!(decode(&encoded), "H");
    }

    #[test]
    fn empty_payload_is_identity() {
        assert_eq!(encode("carrier text", "").unwrap(), "carrier text");
        assert_eq!(encode("", "").unwrap(), "");
    }

    #[test]
    fn empty_carrier_is_glyphs_only() {
        let encoded = encode("", "Hi").unwrap();
        assert_eq!(encoded.chars().count(), 32);
        assert_eq!(encoded, glyphs_for("00000000010010000000000001101001"));
        assert_eq!(decode(&encoded), "Hi");
    }

    #[test]
    fn encode_is_all_or_nothing() {
        assert_eq!(
            encode("carrier", "ok then 🔐"),
            Err(StegoError::CodepointOutOfRange { ch: '🔐', index: 8 })
        );
    }

    #[test]
    fn checked_rejects_reserved_carrier() {
        let carrier = format!("ab{ONE}c");
        assert_eq!(
            encode_checked(&carrier, "x"),
            Err(StegoError::ReservedGlyphInCarrier { index: 2 })
        );
        assert_eq!(encode_checked("abc", "x").unwrap(), encode("abc", "x").unwrap());
    }

    #[test]
    fn plain_text_decodes_empty() {
        assert_eq!(decode("nothing hidden"), "");
        let (text, report) = decode_with_report("nothing hidden");
        assert_eq!(text, "");
        assert_eq!(report, DecodeReport::default());
        assert!(report.is_clean());
    }

    #[test]
    fn trailing_bits_dropped() {
        let mut encoded = encode("AB", "Hi").unwrap();
        encoded.push_str(&glyphs_for("101"));
        assert_eq!(decode(&encoded), "Hi");

        let (_, report) = decode_with_report(&encoded);
        assert_eq!(report.glyphs, 35);
        assert_eq!(report.units, 2);
        assert_eq!(report.dangling_bits, 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn strict_rejects_truncation() {
        let encoded = encode("", "H").unwrap();
        let truncated: String = encoded.chars().take(15).collect();
        assert_eq!(decode(&truncated), "");
        assert_eq!(
            decode_strict(&truncated),
            Err(StegoError::TruncatedStream { dangling_bits: 15 })
        );
        assert_eq!(decode_strict(&encoded).unwrap(), "H");
    }

    #[test]
    fn surrogate_units() {
        // 0xD800 = 1101100000000000
        let encoded = glyphs_for("1101100000000000");
        assert_eq!(decode_units(&encoded), vec![0xD800]);
        assert_eq!(decode(&encoded), "\u{FFFD}");
        assert_eq!(decode_strict(&encoded), Err(StegoError::InvalidUnit(0xD800)));
        assert_eq!(decode_with_report(&encoded).1.replaced_units, 1);
    }
}
