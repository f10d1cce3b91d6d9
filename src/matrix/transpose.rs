//! Materializing logical matrices as dense row-major buffers.
//!
//! The engine never transposes physically; it reads through strides. The
//! reference multiply only understands dense row-major operands, so these
//! helpers lay inputs out for it.

use super::layout::{MatrixOp, StridedMatrix};
use crate::error::Result;

/// Dense row-major copy of the logical (rows × cols) matrix stored in
/// `stored` per `op` with leading dimension `ld`.
///
/// Reads through the same [`StridedMatrix`] addressing as packing and
/// compute, so a transposed or padded operand comes out exactly as the
/// kernel sees it.
///
/// # Example
///
/// ```
/// use fp16gemm::MatrixOp;
/// use fp16gemm::matrix::transpose::to_row_major;
///
/// // logical 3×2, stored transposed as 2×3 inside rows of 4
/// let stored = vec![1.0, 2.0, 3.0, 0.0,
///                   4.0, 5.0, 6.0, 0.0];
///
/// let dense = to_row_major(MatrixOp::Transpose, 3, 2, &stored, 4)?;
///
/// assert_eq!(dense, vec![1.0, 4.0,
///                        2.0, 5.0,
///                        3.0, 6.0]);
/// # Ok::<(), fp16gemm::Error>(())
/// ```
pub fn to_row_major(
    op: MatrixOp,
    rows: usize,
    cols: usize,
    stored: &[f32],
    ld: usize,
) -> Result<Vec<f32>> {
    let view = StridedMatrix::new("source", op, rows, cols, stored, ld)?;
    let mut out = Vec::with_capacity(view.rows() * view.cols());
    for row in 0..view.rows() {
        out.extend((0..view.cols()).map(|col| view.at(row, col)));
    }
    Ok(out)
}

/// Transpose of a dense row-major (rows × cols) matrix, as a new
/// (cols × rows) row-major buffer.
///
/// `src` must hold at least `rows * cols` elements.
pub fn transpose(src: &[f32], rows: usize, cols: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(rows * cols);
    for col in 0..cols {
        out.extend(src[..rows * cols].iter().skip(col).step_by(cols));
    }
    out
}
