// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Glyph placement and extraction.
//!
//! The placement schedule is fixed: one glyph after every carrier character
//! while glyphs remain, then every leftover glyph appended at the end.
//!
//! ```text
//! carrier  A   B   C
//! glyphs   g0  g1  g2 g3 g4
//! output   A g0 B g1 C g2 g3 g4
//! ```
//!
//! Extraction does not invert the schedule. It only relies on the glyph
//! subsequence keeping its order, so any text whose reserved characters
//! appear in bit order decodes the same way.

use crate::glyph::{self, Bit};

/// Interleave glyphs for `bits` into `carrier`.
///
/// The non-glyph subsequence of the result is `carrier` unchanged.
pub fn interleave(carrier: &str, bits: &[Bit]) -> String {
    // Every glyph is 3 bytes in UTF-8.
    let mut out = String::with_capacity(carrier.len() + bits.len() * 3);
    let mut cursor = 0usize;

    for ch in carrier.chars() {
        out.push(ch);
        if let Some(&bit) = bits.get(cursor) {
            out.push(glyph::bit_to_glyph(bit));
            cursor += 1;
        }
    }

    out.extend(bits[cursor..].iter().map(|&bit| glyph::bit_to_glyph(bit)));
    out
}

/// Collect the reserved glyphs of `encoded`, in order, as bits.
///
/// Every other character is discarded.
pub fn extract_bits(encoded: &str) -> Vec<Bit> {
    // The inverse mapping doubles as the filter: only the two reserved glyphs
    // map to a bit, everything else is carrier text.
    encoded.chars().filter_map(|ch| glyph::glyph_to_bit(ch).ok()).collect()
}

/// Remove every reserved glyph from `encoded`, leaving the carrier.
pub fn strip_glyphs(encoded: &str) -> String {
    encoded.chars().filter(|&ch| !glyph::is_reserved_glyph(ch)).collect()
}

/// Character index of the first reserved glyph in `text`, if any.
pub fn find_reserved_glyph(text: &str) -> Option<usize> {
    text.chars().position(glyph::is_reserved_glyph)
}
