//! MR×NR microkernel over half-precision packed B.

use half::f16;

use crate::matrix::layout::StridedMatrix;
use crate::precision::convert_to_f32;

/// Rows of C computed per kernel call.
pub const MR: usize = 4;

/// Widest column panel the kernel accumulates. Packed blocks may be
/// narrower but never wider.
pub const NR: usize = 16;

/// Register tile: one f32 row of accumulators per row of A.
pub type Accumulator = [[f32; NR]; MR];

/// Computes acc[0:rows, 0:cols] += A[row0.., k0..k0+depth] × block
///
/// `block` is one packed B block, row-major with row stride `block_cols`.
/// Only the first `depth` rows and `cols` columns are read, so zero
/// padding in a ragged block never enters the sum. Each B row is widened
/// to f32 once and reused across the `rows` rows of A.
///
/// For every (i, j) the products are added in ascending `k` order, and
/// callers walk blocks in ascending `k0`, which keeps the result identical
/// to a sequential f32 dot product.
#[inline]
#[allow(clippy::too_many_arguments)]
#[allow(clippy::needless_range_loop)]
pub fn kernel_mrxnr_fp16(
    a: &StridedMatrix<'_>,
    row0: usize,
    rows: usize,
    k0: usize,
    depth: usize,
    block: &[f16],
    block_cols: usize,
    cols: usize,
    acc: &mut Accumulator,
) {
    debug_assert!(rows <= MR && cols <= NR && cols <= block_cols);

    let mut b_row = [0.0f32; NR];
    for p in 0..depth {
        let start = p * block_cols;
        convert_to_f32(&block[start..start + cols], &mut b_row[..cols]);

        for (i, acc_row) in acc.iter_mut().enumerate().take(rows) {
            let a_val = a.at(row0 + i, k0 + p);
            for j in 0..cols {
                acc_row[j] += a_val * b_row[j];
            }
        }
    }
}
