//! Trace-driven set-associative cache simulator library.
//!
//! This crate replays sequences of decoded memory accesses against a modeled
//! hardware cache and reports aggregate hit/miss/eviction counts. It provides:
//! 1. **Geometry:** set-index bits, associativity, and block-offset bits.
//! 2. **Cache:** per-set associative lookup with age-counter LRU replacement.
//! 3. **Trace:** valgrind-style `<op> <hex-addr>,<size>` record decoding.
//! 4. **Accounting:** running hit/miss/eviction totals per the reference tool.
//! 5. **Kernel:** a matrix-transpose address stream scored through the model.

/// Cache store, access resolver, and the aging/LRU replacement policy.
pub mod cache;
/// Cache geometry configuration (set bits, lines per set, block bits).
pub mod config;
/// Error taxonomy for trace replay.
pub mod error;
/// Matrix transpose kernel and its address-stream harness.
pub mod kernel;
/// Trace replay driver owning the cache and its totals.
pub mod sim;
/// Hit/miss/eviction accounting.
pub mod stats;
/// Access record decoding from valgrind-style traces.
pub mod trace;

/// Cache model; construct with [`Cache::new`] and drive with [`Cache::access`].
pub use crate::cache::{AccessOutcome, Cache};
/// Geometry parameters; `(s, E, b)` in the reference tool's terms.
pub use crate::config::CacheGeometry;
/// Error type for everything that can fail while replaying a trace.
pub use crate::error::SimError;
/// Top-level simulator: one cache plus its running totals.
pub use crate::sim::Simulator;
/// Final `{hits, misses, evictions}` counters.
pub use crate::stats::RunTotals;
/// Decoded trace entries and the lazy trace-file reader.
pub use crate::trace::{AccessRecord, Operation, TraceFile};
