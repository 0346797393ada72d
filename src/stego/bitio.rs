// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Bit-level packing of 16-bit payload units.
//!
//! Provides [`BitWriter`] for flattening units into a bit sequence and
//! [`BitReader`] for re-chunking a bit sequence into units. Both operate in
//! MSB-first (big-endian) bit order.

use crate::glyph::Bit;

/// Number of bits in one payload unit.
pub const BITS_PER_UNIT: usize = 16;

/// Bit-level writer producing an MSB-first bit sequence.
pub struct BitWriter {
    bits: Vec<Bit>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create a writer with room for `units` full 16-bit units.
    pub fn with_unit_capacity(units: usize) -> Self {
        Self { bits: Vec::with_capacity(units * BITS_PER_UNIT) }
    }

    /// Write one 16-bit unit, most significant bit first.
    pub fn write_unit(&mut self, unit: u16) {
        for shift in (0..BITS_PER_UNIT as u32).rev() {
            self.bits.push(Bit::of(unit, shift));
        }
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Finish writing and return the bit sequence.
    pub fn finish(self) -> Vec<Bit> {
        self.bits
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Bit-level reader that re-chunks a bit sequence into 16-bit units.
///
/// Bits past the last complete unit are never returned as a unit; they are
/// reported by [`BitReader::remaining`] once reading stops.
pub struct BitReader<'a> {
    bits: &'a [Bit],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bits: &'a [Bit]) -> Self {
        Self { bits, pos: 0 }
    }

    /// Read the next complete 16-bit unit, or `None` if fewer than 16 bits
    /// remain.
    pub fn read_unit(&mut self) -> Option<u16> {
        let group = self.bits.get(self.pos..self.pos + BITS_PER_UNIT)?;
        self.pos += BITS_PER_UNIT;
        Some(group.iter().fold(0u16, |acc, bit| (acc << 1) | bit.value()))
    }

    /// Bits not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }
}

impl Iterator for BitReader<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        self.read_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Bit::{One as I, Zero as O};

    #[test]
    fn write_msb_first() {
        let mut w = BitWriter::new();
        w.write_unit(72);
        assert_eq!(
            w.finish(),
            vec![O, O, O, O, O, O, O, O, O, I, O, O, I, O, O, O]
        );
    }

    #[test]
    fn write_extremes() {
        let mut w = BitWriter::with_unit_capacity(2);
        w.write_unit(0);
        w.write_unit(0xFFFF);
        assert_eq!(w.len(), 32);
        let bits = w.finish();
        assert!(bits[..16].iter().all(|&b| b == O));
        assert!(bits[16..].iter().all(|&b| b == I));
    }

    #[test]
    fn read_units() {
        let mut w = BitWriter::new();
        w.write_unit(0x6211);
        w.write_unit(0x0041);
        let bits = w.finish();
        let mut r = BitReader::new(&bits);
        assert_eq!(r.read_unit(), Some(0x6211));
        assert_eq!(r.read_unit(), Some(0x0041));
        assert_eq!(r.read_unit(), None);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn read_leaves_partial_group() {
        let mut w = BitWriter::new();
        w.write_unit(0xABCD);
        let mut bits = w.finish();
        bits.extend_from_slice(&[I, O, I]);
        let mut r = BitReader::new(&bits);
        assert_eq!(r.by_ref().collect::<Vec<_>>(), vec![0xABCD]);
        assert_eq!(r.remaining(), 3);
    }

    #[test]
    fn read_empty() {
        let mut r = BitReader::new(&[]);
        assert_eq!(r.read_unit(), None);
        assert_eq!(r.remaining(), 0);
    }
}
