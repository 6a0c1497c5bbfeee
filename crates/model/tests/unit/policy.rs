//! Aging/LRU Policy Unit Tests.
//!
//! Exercises victim selection and per-set aging in isolation, directly on
//! line slices. Replay alone cannot produce two valid lines with equal
//! ages, so the tie-break is pinned down here.

use cachesim_core::cache::policy::{age_set, select_victim};
use cachesim_core::cache::CacheLine;

fn line(age: u64) -> CacheLine {
    CacheLine {
        valid: true,
        tag: 0,
        age,
    }
}

// ══════════════════════════════════════════════════════════
// 1. Victim Selection
// ══════════════════════════════════════════════════════════

/// The strictly greatest age wins.
#[test]
fn victim_is_oldest_line() {
    let set = [line(0), line(2), line(1)];
    assert_eq!(select_victim(&set), 1);
}

/// An all-equal set resolves to way 0.
#[test]
fn all_equal_ages_pick_way_zero() {
    let set = [line(5), line(5), line(5), line(5)];
    assert_eq!(select_victim(&set), 0);
}

/// Ties on the maximal age break toward the lowest way index.
#[test]
fn ties_break_toward_lowest_way() {
    let set = [line(3), line(3), line(1)];
    assert_eq!(select_victim(&set), 0);

    let set = [line(1), line(3), line(3)];
    assert_eq!(select_victim(&set), 1);

    let set = [line(2), line(7), line(7), line(7)];
    assert_eq!(select_victim(&set), 1);
}

/// A single-way set has exactly one candidate.
#[test]
fn single_way_set() {
    let set = [line(9)];
    assert_eq!(select_victim(&set), 0);
}

// ══════════════════════════════════════════════════════════
// 2. Aging
// ══════════════════════════════════════════════════════════

/// Every valid line ages by exactly one tick.
#[test]
fn aging_increments_valid_lines() {
    let mut set = [line(0), line(4)];
    age_set(&mut set);
    assert_eq!(set[0].age, 1);
    assert_eq!(set[1].age, 5);
}

/// Invalid lines never age.
#[test]
fn aging_skips_invalid_lines() {
    let mut set = [line(2), CacheLine::default()];
    age_set(&mut set);
    assert_eq!(set[0].age, 3);
    assert_eq!(set[1].age, 0, "invalid lines must keep age 0");
    assert!(!set[1].valid);
}
