// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Zero-width text steganography.
//!
//! The payload is split into 16-bit units, each unit into 16 bits (MSB
//! first), and each bit becomes one zero-width glyph. The glyphs are spread
//! through the carrier, one after every visible character, with any
//! remainder appended at the end.
//!
//! - [`encode`] / [`decode`]: the codec itself. `decode` never fails.
//! - [`encode_checked`] / [`decode_strict`]: reject inputs the plain codec
//!   would silently mangle (reserved glyphs in the carrier, truncated glyph
//!   streams, lone surrogates).
//! - [`capacity_info`]: how the glyphs will land in a given carrier.
//! - [`encode_batch`] / [`decode_batch`]: many items at once, in parallel
//!   with the `parallel` feature.

pub mod error;
pub mod bitio;
pub mod payload;
pub mod interleave;
pub mod capacity;
mod pipeline;
pub mod batch;

pub use error::StegoError;
pub use bitio::BITS_PER_UNIT;
pub use payload::MAX_PAYLOAD_CODEPOINT;
pub use pipeline::{
    decode, decode_strict, decode_units, decode_with_report, encode, encode_checked, DecodeReport,
};
pub use capacity::{capacity_info, inline_capacity, payload_fits_inline, CapacityInfo};
pub use batch::{encode_batch, decode_batch};
