//! Blocked GEMM over a half-precision packed B.

use super::BlockSize;
use super::packed_fp16::PackedGemmMatrixF16;
use crate::error::{Error, Result};
use crate::kernels::kernel_fp16::{Accumulator, MR, NR, kernel_mrxnr_fp16};
use crate::matrix::layout::{MatrixOp, StridedMatrix, required_len};

/// C = op(A) × B_packed + beta × C
///
/// A is (m × k) logically, stored per `trans_a` with leading dimension
/// `lda`. k and n come from `packed_b`, whose values already carry alpha.
/// C is (m × n) row-major with leading dimension `ldc` and is updated in
/// place.
///
/// Walks the column panels of packed B; for each panel and each MR-row
/// tile of A it accumulates over every k-block in order into a stack tile,
/// then writes the tile out once. With `beta == 0` C is only written, so
/// its prior contents (even NaN) never reach the result.
///
/// # Errors
///
/// Zero `m`, a leading dimension shorter than the stored row, an A/C
/// slice too short for the described shape, or a shape whose extent
/// overflows `usize`.
#[allow(clippy::too_many_arguments)]
pub fn gemm_compute(
    trans_a: MatrixOp,
    m: usize,
    a: &[f32],
    lda: usize,
    packed_b: &PackedGemmMatrixF16,
    beta: f32,
    c: &mut [f32],
    ldc: usize,
) -> Result<()> {
    if m == 0 {
        return Err(Error::InvalidDimension { dim: "m", value: m });
    }
    let k = packed_b.num_rows();
    let n = packed_b.num_cols();
    let a = StridedMatrix::new("A", trans_a, m, k, a, lda)?;
    if ldc < n {
        return Err(Error::LeadingDimension {
            matrix: "C",
            ld: ldc,
            min: n,
        });
    }
    let required = required_len("C", m, n, ldc)?;
    if c.len() < required {
        return Err(Error::BufferTooSmall {
            matrix: "C",
            len: c.len(),
            required,
        });
    }

    log::trace!(
        "gemm fp16: m={} n={} k={} trans_a={:?} beta={}",
        m,
        n,
        k,
        trans_a,
        beta
    );

    let BlockSize {
        rows: kc,
        cols: nc,
    } = packed_b.block_size();

    for jb in 0..packed_b.num_block_cols() {
        let j0 = jb * nc;
        let cols = nc.min(n - j0);

        for i0 in (0..m).step_by(MR) {
            let rows = MR.min(m - i0);
            let mut acc: Accumulator = [[0.0; NR]; MR];

            for kb in 0..packed_b.num_block_rows() {
                let k0 = kb * kc;
                let depth = kc.min(k - k0);
                kernel_mrxnr_fp16(
                    &a,
                    i0,
                    rows,
                    k0,
                    depth,
                    packed_b.block(kb, jb),
                    nc,
                    cols,
                    &mut acc,
                );
            }

            store_tile(&acc, c, ldc, i0, j0, rows, cols, beta);
        }
    }

    Ok(())
}

/// [`gemm_compute`] with the full (m, n, k) spelled out.
///
/// Checks the caller's n and k against the packed matrix first, for call
/// sites that track the GEMM shape independently of the packed object.
#[allow(clippy::too_many_arguments)]
pub fn gemm_compute_mnk(
    trans_a: MatrixOp,
    m: usize,
    n: usize,
    k: usize,
    a: &[f32],
    lda: usize,
    packed_b: &PackedGemmMatrixF16,
    beta: f32,
    c: &mut [f32],
    ldc: usize,
) -> Result<()> {
    for (dim, value) in [("m", m), ("n", n), ("k", k)] {
        if value == 0 {
            return Err(Error::InvalidDimension { dim, value });
        }
    }
    if k != packed_b.num_rows() {
        return Err(Error::ShapeMismatch {
            dim: "k",
            expected: packed_b.num_rows(),
            got: k,
        });
    }
    if n != packed_b.num_cols() {
        return Err(Error::ShapeMismatch {
            dim: "n",
            expected: packed_b.num_cols(),
            got: n,
        });
    }
    gemm_compute(trans_a, m, a, lda, packed_b, beta, c, ldc)
}

// Write a finished tile: C = acc, or C = acc + beta * C
#[allow(clippy::too_many_arguments)]
fn store_tile(
    acc: &Accumulator,
    c: &mut [f32],
    ldc: usize,
    row0: usize,
    col0: usize,
    rows: usize,
    cols: usize,
    beta: f32,
) {
    for (i, acc_row) in acc.iter().enumerate().take(rows) {
        let start = (row0 + i) * ldc + col0;
        let out = &mut c[start..start + cols];
        if beta == 0.0 {
            out.copy_from_slice(&acc_row[..cols]);
        } else {
            for (dst, &sum) in out.iter_mut().zip(&acc_row[..cols]) {
                *dst = sum + beta * *dst;
            }
        }
    }
}
