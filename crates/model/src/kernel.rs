//! Matrix transpose kernel and its address-stream harness.
//!
//! Companion to the trace-file path: the transpose is scored by
//! synthesizing the Load/Store stream it would issue and replaying that
//! stream through the same [`Simulator`] that consumes trace files. A
//! tiled traversal keeps the working set of both matrices resident in a
//! small cache, which is what the score makes visible.

use crate::config::CacheGeometry;
use crate::sim::Simulator;
use crate::stats::RunTotals;
use crate::trace::{AccessRecord, Operation};

/// Bytes per matrix element in the synthesized address stream.
const ELEMENT_BYTES: u64 = 4;

/// Transposes `a` (`rows x cols`, row-major) into `b` (`cols x rows`).
///
/// Works in `tile x tile` blocks; `tile = 1` degenerates to the plain
/// row-wise scan. `tile` must be nonzero and both slices must hold exactly
/// `rows * cols` elements.
pub fn transpose(rows: usize, cols: usize, tile: usize, a: &[i32], b: &mut [i32]) {
    assert!(tile > 0, "tile size must be nonzero");
    assert_eq!(a.len(), rows * cols, "source shape mismatch");
    assert_eq!(b.len(), rows * cols, "destination shape mismatch");

    for row_block in (0..rows).step_by(tile) {
        for col_block in (0..cols).step_by(tile) {
            for row in row_block..rows.min(row_block + tile) {
                for col in col_block..cols.min(col_block + tile) {
                    b[col * rows + row] = a[row * cols + col];
                }
            }
        }
    }
}

/// Synthesizes the memory accesses of [`transpose`] as trace records.
///
/// One load per source element read and one store per destination element
/// written, in traversal order, with the two matrices laid out back to
/// back from address 0.
pub fn transpose_trace(rows: usize, cols: usize, tile: usize) -> Vec<AccessRecord> {
    assert!(tile > 0, "tile size must be nonzero");

    let a_base = 0u64;
    let b_base = (rows * cols) as u64 * ELEMENT_BYTES;
    let mut records = Vec::with_capacity(2 * rows * cols);

    for row_block in (0..rows).step_by(tile) {
        for col_block in (0..cols).step_by(tile) {
            for row in row_block..rows.min(row_block + tile) {
                for col in col_block..cols.min(col_block + tile) {
                    records.push(AccessRecord {
                        op: Operation::Load,
                        addr: a_base + (row * cols + col) as u64 * ELEMENT_BYTES,
                        size: ELEMENT_BYTES,
                    });
                    records.push(AccessRecord {
                        op: Operation::Store,
                        addr: b_base + (col * rows + row) as u64 * ELEMENT_BYTES,
                        size: ELEMENT_BYTES,
                    });
                }
            }
        }
    }
    records
}

/// Replays a tiled transpose through a cold cache and reports the totals.
pub fn score_transpose(
    geometry: &CacheGeometry,
    rows: usize,
    cols: usize,
    tile: usize,
) -> RunTotals {
    let mut sim = Simulator::new(geometry);
    sim.replay(transpose_trace(rows, cols, tile));
    *sim.totals()
}
