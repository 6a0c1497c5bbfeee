//! Set-Associative Cache Model.
//!
//! This module implements the cache store and the access resolver: address
//! decomposition into tag/set/offset, per-set associative lookup, and line
//! fill/replacement. Replacement is least-recently-used, driven by the
//! per-line age counters maintained in [`policy`].

/// Aging-based LRU replacement (victim selection and per-set aging).
pub mod policy;

use tracing::{debug, trace};

use crate::config::CacheGeometry;

/// One cache slot.
///
/// `tag` is meaningless while `valid` is false. `age` counts accesses to
/// this line's set since the line was last touched; it is a relative
/// recency counter, never a wall-clock timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Whether the slot currently holds data.
    pub valid: bool,
    /// Address tag stored in the slot.
    pub tag: u64,
    /// Ticks since this line was last hit or filled; 0 = most recent.
    pub age: u64,
}

/// Classification of one resolved access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// A valid line with a matching tag was found.
    Hit,
    /// The tag was absent but an invalid slot took the fill.
    Miss,
    /// The tag was absent and a valid line had to be replaced.
    MissEviction,
}

impl AccessOutcome {
    /// Reference-tool classification string: `hit`, `miss`, or
    /// `miss eviction`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
            Self::MissEviction => "miss eviction",
        }
    }

    /// True for both miss variants.
    pub const fn is_miss(self) -> bool {
        !matches!(self, Self::Hit)
    }
}

/// The modeled cache: `2^s` sets of `E` lines each, stored flat.
///
/// Created cold once at startup and mutated only by [`Cache::access`]
/// during replay. Sets are peers; no access ever touches more than one set.
#[derive(Debug, Clone)]
pub struct Cache {
    geometry: CacheGeometry,
    lines: Vec<CacheLine>,
}

impl Cache {
    /// Allocates a cold cache: every line invalid, tag 0, age 0.
    pub fn new(geometry: &CacheGeometry) -> Self {
        let line_count = geometry.num_sets() * geometry.lines_per_set;
        Self {
            geometry: *geometry,
            lines: vec![CacheLine::default(); line_count],
        }
    }

    /// The geometry this cache was built from.
    pub const fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// Read-only view of one line.
    ///
    /// Bounds are a programming contract: `set_index < 2^s` and
    /// `way < E` always hold for indices derived from a correct address
    /// decomposition.
    pub fn line(&self, set_index: usize, way: usize) -> &CacheLine {
        debug_assert!(set_index < self.geometry.num_sets());
        debug_assert!(way < self.geometry.lines_per_set);
        &self.lines[set_index * self.geometry.lines_per_set + way]
    }

    fn set_mut(&mut self, set_index: usize) -> &mut [CacheLine] {
        let ways = self.geometry.lines_per_set;
        let base = set_index * ways;
        &mut self.lines[base..base + ways]
    }

    /// Resolves one data access and updates the cache state.
    ///
    /// The ways of the selected set are scanned from index 0 upward: a
    /// valid line with a matching tag is a hit; otherwise the first invalid
    /// slot takes the fill; if the set is full, the LRU victim is
    /// overwritten. Afterwards every valid line in the set ages by one tick
    /// and the touched line is reset to age 0, so the touched line ends
    /// each access at age 0 and its set-mates at +1. Other sets are never
    /// affected.
    pub fn access(&mut self, addr: u64) -> AccessOutcome {
        let tag = self.geometry.tag_of(addr);
        let set_index = self.geometry.set_of(addr);
        let set = self.set_mut(set_index);

        let mut resolved = None;
        for (way, line) in set.iter_mut().enumerate() {
            if line.valid && line.tag == tag {
                resolved = Some((way, AccessOutcome::Hit));
                break;
            }
            if !line.valid {
                line.valid = true;
                line.tag = tag;
                resolved = Some((way, AccessOutcome::Miss));
                break;
            }
        }

        let (touched, outcome) = match resolved {
            Some(hit_or_fill) => hit_or_fill,
            None => {
                let victim = policy::select_victim(set);
                debug!(
                    set = set_index,
                    way = victim,
                    evicted_tag = set[victim].tag,
                    new_tag = tag,
                    "replacing LRU line"
                );
                set[victim].tag = tag;
                (victim, AccessOutcome::MissEviction)
            }
        };

        policy::age_set(set);
        set[touched].age = 0;

        trace!(
            addr,
            set = set_index,
            tag,
            way = touched,
            outcome = outcome.label(),
            "resolved access"
        );
        outcome
    }
}
