//! Error taxonomy for trace replay.
//!
//! The taxonomy is deliberately small: trace I/O and malformed records are
//! the only recoverable failures. Out-of-range set or way indices computed
//! from an address indicate a defect in address decomposition and are
//! treated as debug assertions, not errors; cache allocation failure aborts
//! the process (Rust's OOM behavior), as no partial-cache recovery path is
//! defined.

use std::io;

use thiserror::Error;

/// Everything that can fail while driving the simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// The trace file could not be opened or read.
    #[error("could not read trace '{path}': {source}")]
    TraceIo {
        /// Path of the trace file as given.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A trace line did not match `<op> <hex-addr>,<size>`.
    #[error("malformed trace record at line {line}: {text:?}")]
    MalformedRecord {
        /// One-based line number within the trace file.
        line: usize,
        /// The offending line, verbatim.
        text: String,
    },
}
