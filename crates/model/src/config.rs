//! Configuration for the simulated cache.
//!
//! The geometry is supplied once before any access is processed and is
//! immutable for the run. It can be built directly from CLI flags or
//! deserialized from JSON.

use serde::Deserialize;

/// Cache geometry: `(s, E, b)` in the reference tool's terms.
///
/// The derived quantities are `2^set_bits` sets and `2^block_bits` bytes per
/// block. Values are not validated here; the construction boundary (CLI or
/// config file) is responsible for rejecting nonsensical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheGeometry {
    /// Number of set-index bits (`s`).
    pub set_bits: u32,
    /// Associativity (`E`): lines per set.
    pub lines_per_set: usize,
    /// Number of block-offset bits (`b`).
    pub block_bits: u32,
}

impl CacheGeometry {
    /// Creates a geometry from the three raw parameters.
    pub const fn new(set_bits: u32, lines_per_set: usize, block_bits: u32) -> Self {
        Self {
            set_bits,
            lines_per_set,
            block_bits,
        }
    }

    /// Number of sets, `S = 2^s`.
    pub const fn num_sets(&self) -> usize {
        1 << self.set_bits
    }

    /// Block size in bytes, `B = 2^b`.
    pub const fn block_bytes(&self) -> usize {
        1 << self.block_bits
    }

    /// High-order address bits identifying which memory block a line holds.
    pub const fn tag_of(&self, addr: u64) -> u64 {
        addr >> (self.set_bits + self.block_bits)
    }

    /// Middle address bits selecting the set.
    ///
    /// The low `block_bits` are discarded first; block-internal position is
    /// irrelevant to the hit/miss outcome.
    pub const fn set_of(&self, addr: u64) -> usize {
        ((addr >> self.block_bits) as usize) & (self.num_sets() - 1)
    }
}
