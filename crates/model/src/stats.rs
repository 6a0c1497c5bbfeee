//! Run accounting.
//!
//! One `RunTotals` is owned by the simulator for the duration of a replay,
//! incremented per classification, and read once at the end. The `Display`
//! rendering matches the reference tool's summary line byte for byte.

use std::fmt;

use serde::Serialize;

use crate::cache::AccessOutcome;
use crate::trace::Operation;

/// Running `{hits, misses, evictions}` totals for one replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunTotals {
    /// Accesses resolved in the cache, plus the store half of every
    /// `Modify`.
    pub hits: u64,
    /// Accesses that had to fill or replace a line.
    pub misses: u64,
    /// Misses that displaced a valid line.
    pub evictions: u64,
}

impl RunTotals {
    /// Applies one access classification.
    ///
    /// `Modify` is a load followed by a store to the same address. The
    /// store half always finds the line the load half just resolved, so it
    /// is credited as one unconditional extra hit after the load's own
    /// classification. That is a quirk of the reference model preserved
    /// for trace-result compatibility, not a general caching rule.
    pub fn record(&mut self, outcome: AccessOutcome, op: Operation) {
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss => self.misses += 1,
            AccessOutcome::MissEviction => {
                self.misses += 1;
                self.evictions += 1;
            }
        }
        if op == Operation::Modify {
            self.hits += 1;
        }
    }
}

impl fmt::Display for RunTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits:{} misses:{} evictions:{}",
            self.hits, self.misses, self.evictions
        )
    }
}
