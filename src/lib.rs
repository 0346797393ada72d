// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # phasm-text
//!
//! Pure-Rust text steganography: hides a message inside ordinary visible
//! text as a stream of zero-width Unicode characters.
//!
//! - U+200B ZERO WIDTH SPACE carries a `0` bit.
//! - U+200C ZERO WIDTH NON-JOINER carries a `1` bit.
//!
//! Each message character is stored as a 16-bit unit, so only characters in
//! the Basic Multilingual Plane can be hidden; anything else is rejected with
//! [`StegoError::CodepointOutOfRange`].
//!
//! This is obfuscation, not encryption. Anyone who knows the scheme can read
//! the message, and any channel that strips zero-width characters destroys
//! it.
//!
//! # Quick start
//!
//! ```rust
//! use phasm_text::{encode, decode};
//!
//! let stego = encode("Nothing to see here.", "secret").unwrap();
//! assert_eq!(decode(&stego), "secret");
//! ```

pub mod glyph;
pub mod stego;

pub use glyph::{Bit, ZERO_WIDTH_NON_JOINER, ZERO_WIDTH_SPACE};
pub use stego::{
    decode, decode_strict, decode_units, decode_with_report, encode, encode_checked, DecodeReport,
    StegoError,
};
pub use stego::{capacity_info, inline_capacity, payload_fits_inline, CapacityInfo};
pub use stego::{encode_batch, decode_batch};
pub use stego::{BITS_PER_UNIT, MAX_PAYLOAD_CODEPOINT};
