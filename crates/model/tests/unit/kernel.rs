//! Transpose Kernel Unit Tests.
//!
//! The kernel exists to demonstrate the externally-supplied address stream
//! path: the same simulator that consumes trace files scores a synthesized
//! transpose access stream. The classic result must hold: tiling cuts the
//! miss count on a small direct-mapped cache.

use cachesim_core::kernel::{score_transpose, transpose, transpose_trace};
use cachesim_core::trace::Operation;
use cachesim_core::CacheGeometry;

/// 1 KiB direct-mapped cache with 32-byte blocks (s=5, E=1, b=5); the
/// configuration the original transpose exercise is scored on.
fn scoring_geometry() -> CacheGeometry {
    CacheGeometry::new(5, 1, 5)
}

// ══════════════════════════════════════════════════════════
// 1. Correctness
// ══════════════════════════════════════════════════════════

/// Tiled transpose produces the transpose.
#[test]
fn transpose_is_correct() {
    let (rows, cols) = (13, 7);
    let a: Vec<i32> = (0..(rows * cols) as i32).collect();
    let mut b = vec![0; rows * cols];

    transpose(rows, cols, 4, &a, &mut b);

    for row in 0..rows {
        for col in 0..cols {
            assert_eq!(b[col * rows + row], a[row * cols + col]);
        }
    }
}

/// Tile size does not change the result, only the traversal order.
#[test]
fn tile_size_is_semantically_neutral() {
    let (rows, cols) = (32, 32);
    let a: Vec<i32> = (0..(rows * cols) as i32).rev().collect();

    let mut plain = vec![0; rows * cols];
    let mut tiled = vec![0; rows * cols];
    transpose(rows, cols, 1, &a, &mut plain);
    transpose(rows, cols, 8, &a, &mut tiled);

    assert_eq!(plain, tiled);
}

// ══════════════════════════════════════════════════════════
// 2. Address Stream
// ══════════════════════════════════════════════════════════

/// One load and one store per element, loads from the source matrix and
/// stores into the destination placed right after it.
#[test]
fn stream_shape() {
    let (rows, cols) = (4, 4);
    let records = transpose_trace(rows, cols, 2);

    assert_eq!(records.len(), 2 * rows * cols);
    let split = (rows * cols * 4) as u64;
    for pair in records.chunks(2) {
        assert_eq!(pair[0].op, Operation::Load);
        assert!(pair[0].addr < split, "loads read the source matrix");
        assert_eq!(pair[1].op, Operation::Store);
        assert!(pair[1].addr >= split, "stores write the destination");
    }
}

// ══════════════════════════════════════════════════════════
// 3. Scoring
// ══════════════════════════════════════════════════════════

/// Every access is classified: hits and misses partition the stream.
#[test]
fn totals_partition_the_stream() {
    let totals = score_transpose(&scoring_geometry(), 32, 32, 8);
    assert_eq!(totals.hits + totals.misses, 2 * 32 * 32);
    assert!(totals.evictions <= totals.misses);
}

/// Tiling beats the row-wise scan on the scoring cache, which is the whole
/// point of the exercise.
#[test]
fn tiled_transpose_misses_less() {
    let geometry = scoring_geometry();
    let tiled = score_transpose(&geometry, 32, 32, 8);
    let plain = score_transpose(&geometry, 32, 32, 1);

    assert!(
        tiled.misses < plain.misses,
        "tiled {} vs plain {} misses",
        tiled.misses,
        plain.misses
    );
}
