// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Batch encode/decode.
//!
//! Each item is independent, so with the `parallel` feature the batch is
//! spread over the rayon thread pool. Output order always matches input
//! order and results are identical to the serial path.

use crate::stego::error::StegoError;
use crate::stego::pipeline::{decode, encode};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Encode every `(carrier, payload)` pair.
///
/// A failing pair does not affect the others.
#[cfg(feature = "parallel")]
pub fn encode_batch<C, P>(items: &[(C, P)]) -> Vec<Result<String, StegoError>>
where
    C: AsRef<str> + Sync,
    P: AsRef<str> + Sync,
{
    items
        .par_iter()
        .map(|(carrier, payload)| encode(carrier.as_ref(), payload.as_ref()))
        .collect()
}

/// Encode every `(carrier, payload)` pair.
///
/// A failing pair does not affect the others.
#[cfg(not(feature = "parallel"))]
pub fn encode_batch<C, P>(items: &[(C, P)]) -> Vec<Result<String, StegoError>>
where
    C: AsRef<str>,
    P: AsRef<str>,
{
    items
        .iter()
        .map(|(carrier, payload)| encode(carrier.as_ref(), payload.as_ref()))
        .collect()
}

/// Decode every encoded text.
#[cfg(feature = "parallel")]
pub fn decode_batch<T: AsRef<str> + Sync>(items: &[T]) -> Vec<String> {
    items.par_iter().map(|encoded| decode(encoded.as_ref())).collect()
}

/// Decode every encoded text.
#[cfg(not(feature = "parallel"))]
pub fn decode_batch<T: AsRef<str>>(items: &[T]) -> Vec<String> {
    items.iter().map(|encoded| decode(encoded.as_ref())).collect()
}
