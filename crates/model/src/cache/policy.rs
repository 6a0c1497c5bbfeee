//! Aging-based LRU Replacement Policy.
//!
//! Recency is tracked with a per-line integer age, not a clock: every
//! access to a set ages all of its valid lines by one and resets the
//! touched line to 0, so the largest age in a set marks the line that has
//! gone longest without a touch. Ages only ever reset or increment by one;
//! this, together with the victim tie-break below, is part of the
//! observable contract and must not be replaced with timestamps.

use super::CacheLine;

/// Picks the eviction victim from a full set.
///
/// Explicit fold starting at way 0 with a strict `>` comparison: equal
/// maximal ages resolve to the lowest way index. A generic max helper is
/// deliberately not used here, since its tie behavior (first vs. last
/// maximum) is not guaranteed to match.
pub fn select_victim(set: &[CacheLine]) -> usize {
    let mut victim = 0;
    for (way, line) in set.iter().enumerate().skip(1) {
        if line.age > set[victim].age {
            victim = way;
        }
    }
    victim
}

/// Ages every valid line in the set by one tick.
///
/// Invalid lines never age; lines in other sets are untouched by
/// construction (the caller passes exactly one set's slice).
pub fn age_set(set: &mut [CacheLine]) {
    for line in set {
        if line.valid {
            line.age += 1;
        }
    }
}
