//! Transpose flags and strided addressing.
//!
//! Every matrix the engine touches is read through [`StridedMatrix::at`],
//! so packing and compute agree on what `(row, col)` means.

use crate::error::{Error, Result};

/// How an operand is stored relative to its logical shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatrixOp {
    /// Stored as the logical (rows × cols), row-major.
    #[default]
    NoTranspose,
    /// Stored as (cols × rows), row-major: the logical matrix is its transpose.
    Transpose,
}

impl MatrixOp {
    /// Shape of the buffer as it sits in memory for a logical (rows, cols).
    #[inline]
    pub fn stored_shape(self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            MatrixOp::NoTranspose => (rows, cols),
            MatrixOp::Transpose => (cols, rows),
        }
    }

    /// (row stride, col stride) of the logical matrix.
    #[inline]
    pub fn strides(self, ld: usize) -> (usize, usize) {
        match self {
            MatrixOp::NoTranspose => (ld, 1),
            MatrixOp::Transpose => (1, ld),
        }
    }

    /// Leading dimension of a densely stored buffer.
    #[inline]
    pub fn dense_ld(self, rows: usize, cols: usize) -> usize {
        self.stored_shape(rows, cols).1
    }
}

/// Read-only logical view over a caller buffer.
#[derive(Debug, Clone, Copy)]
pub struct StridedMatrix<'a> {
    data: &'a [f32],
    rows: usize,
    cols: usize,
    row_stride: usize,
    col_stride: usize,
}

impl<'a> StridedMatrix<'a> {
    /// Build a logical (rows × cols) view of `data` stored per `op` with
    /// leading dimension `ld`.
    ///
    /// `name` only labels errors.
    pub fn new(
        name: &'static str,
        op: MatrixOp,
        rows: usize,
        cols: usize,
        data: &'a [f32],
        ld: usize,
    ) -> Result<Self> {
        let (stored_rows, stored_cols) = op.stored_shape(rows, cols);
        if ld < stored_cols {
            return Err(Error::LeadingDimension {
                matrix: name,
                ld,
                min: stored_cols,
            });
        }
        let required = required_len(name, stored_rows, stored_cols, ld)?;
        if data.len() < required {
            return Err(Error::BufferTooSmall {
                matrix: name,
                len: data.len(),
                required,
            });
        }
        let (row_stride, col_stride) = op.strides(ld);
        Ok(Self {
            data,
            rows,
            cols,
            row_stride,
            col_stride,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Logical element (row, col).
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.row_stride + col * self.col_stride]
    }
}

/// Smallest slice length holding `rows` rows of `cols` with stride `ld`.
///
/// Fails with `SizeOverflow` when that length does not fit in `usize`.
#[inline]
pub fn required_len(name: &'static str, rows: usize, cols: usize, ld: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Ok(0);
    }
    (rows - 1)
        .checked_mul(ld)
        .and_then(|len| len.checked_add(cols))
        .ok_or(Error::SizeOverflow {
            matrix: name,
            rows,
            ld,
        })
}
