// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Payload text ↔ 16-bit units.
//!
//! Every payload character is stored as exactly one 16-bit unit holding its
//! scalar value. Characters outside the Basic Multilingual Plane do not fit
//! and are rejected up front:
//!
//! ```text
//! 'H'   U+0048   ->  0x0048
//! '我'  U+6211   ->  0x6211
//! '😀'  U+1F600  ->  CodepointOutOfRange
//! ```
//!
//! Going the other way, a unit in the surrogate range U+D800–U+DFFF has no
//! `char` equivalent. The lenient path substitutes U+FFFD, the strict path
//! fails with [`StegoError::InvalidUnit`].

use crate::stego::error::StegoError;

/// Largest scalar value a payload character may have.
pub const MAX_PAYLOAD_CODEPOINT: u32 = 0xFFFF;

/// Convert payload text into 16-bit units.
///
/// All-or-nothing: the whole payload is checked before anything is returned.
///
/// # Errors
/// [`StegoError::CodepointOutOfRange`] for the first character above
/// [`MAX_PAYLOAD_CODEPOINT`].
pub fn encode_units(payload: &str) -> Result<Vec<u16>, StegoError> {
    payload
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            u16::try_from(ch as u32).map_err(|_| StegoError::CodepointOutOfRange { ch, index })
        })
        .collect()
}

/// Number of units `payload` would occupy, without allocating.
pub fn unit_count(payload: &str) -> Result<usize, StegoError> {
    let mut count = 0usize;
    for (index, ch) in payload.chars().enumerate() {
        if ch as u32 > MAX_PAYLOAD_CODEPOINT {
            return Err(StegoError::CodepointOutOfRange { ch, index });
        }
        count += 1;
    }
    Ok(count)
}

/// Convert units back to text, replacing surrogate units with U+FFFD.
///
/// Returns the text and the number of units that were replaced.
pub fn decode_units_lossy(units: &[u16]) -> (String, usize) {
    let mut text = String::with_capacity(units.len());
    let mut replaced = 0usize;
    for &unit in units {
        match char::from_u32(unit as u32) {
            Some(ch) => text.push(ch),
            None => {
                tracing::warn!(unit, "replacing lone surrogate unit with U+FFFD");
                replaced += 1;
                text.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }
    (text, replaced)
}

/// Convert units back to text, failing on the first surrogate unit.
///
/// # Errors
/// [`StegoError::InvalidUnit`] if any unit lies in U+D800–U+DFFF.
pub fn decode_units_strict(units: &[u16]) -> Result<String, StegoError> {
    units
        .iter()
        .map(|&unit| char::from_u32(unit as u32).ok_or(StegoError::InvalidUnit(unit)))
        .collect()
}
