//! Simulator: owns the cache and its running totals side by side.
//!
//! The replay is a plain sequential fold: one record at a time, strictly
//! in trace order, no globals anywhere. Anything that can produce
//! `AccessRecord`s can drive it, whether a trace file or a synthesized
//! address stream.

use crate::cache::{AccessOutcome, Cache};
use crate::config::CacheGeometry;
use crate::stats::RunTotals;
use crate::trace::{AccessRecord, Operation};

/// Top-level simulator: one cold cache plus zeroed totals.
#[derive(Debug, Clone)]
pub struct Simulator {
    cache: Cache,
    totals: RunTotals,
}

impl Simulator {
    /// Creates a simulator over a cold cache with the given geometry.
    pub fn new(geometry: &CacheGeometry) -> Self {
        Self {
            cache: Cache::new(geometry),
            totals: RunTotals::default(),
        }
    }

    /// Processes one record and returns its classification.
    ///
    /// `Instruction` records are short-circuited here: they never reach
    /// the cache and yield `None`. Everything else runs the resolver and
    /// updates the totals.
    pub fn step(&mut self, record: AccessRecord) -> Option<AccessOutcome> {
        if record.op == Operation::Instruction {
            return None;
        }
        let outcome = self.cache.access(record.addr);
        self.totals.record(outcome, record.op);
        Some(outcome)
    }

    /// Replays a whole access sequence in order.
    pub fn replay<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = AccessRecord>,
    {
        for record in records {
            let _ = self.step(record);
        }
    }

    /// The cache being modeled.
    pub const fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Hit/miss/eviction totals accumulated so far.
    pub const fn totals(&self) -> &RunTotals {
        &self.totals
    }
}
