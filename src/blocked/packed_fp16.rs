//! Half-precision packed B matrix.

use half::f16;

use super::BlockSize;
use crate::error::{Error, Result};
use crate::matrix::layout::{MatrixOp, StridedMatrix};
use crate::precision::{f16_to_f32, f32_to_f16};

/// B operand packed once into cache-sized f16 blocks, alpha already applied.
///
/// The logical shape is (k × n) whatever the source layout was. Blocks of
/// `block_size.rows × block_size.cols` are stored back to back in one
/// buffer: all k-blocks of column panel 0, then all k-blocks of panel 1,
/// and so on, each block row-major. Trailing blocks are zero-padded to the
/// full block size. Blocks never exceed the matrix itself: a requested
/// block larger than (k × n) is shrunk to fit before packing, and
/// [`block_size`](Self::block_size) reports the size actually used.
///
/// The value is immutable once built and holds no reference to the source,
/// so it can be shared across threads and reused for any number of
/// [`gemm_compute`](super::gemm_fp16::gemm_compute) calls.
#[derive(Debug, Clone)]
pub struct PackedGemmMatrixF16 {
    data: Vec<f16>,
    k: usize,
    n: usize,
    trans: MatrixOp,
    alpha: f32,
    block_size: BlockSize,
    num_block_rows: usize,
    num_block_cols: usize,
}

impl PackedGemmMatrixF16 {
    /// Pack a densely stored B.
    ///
    /// `src` holds B as (k × n) when `trans` is `NoTranspose`, or as
    /// (n × k) when it is `Transpose`.
    pub fn new(trans: MatrixOp, k: usize, n: usize, alpha: f32, src: &[f32]) -> Result<Self> {
        let ld = trans.dense_ld(k, n);
        Self::with_leading_dim(trans, k, n, alpha, src, ld)
    }

    /// Pack B from a buffer with an explicit leading dimension.
    pub fn with_leading_dim(
        trans: MatrixOp,
        k: usize,
        n: usize,
        alpha: f32,
        src: &[f32],
        ld: usize,
    ) -> Result<Self> {
        Self::with_block_size(trans, k, n, alpha, src, ld, BlockSize::default())
    }

    /// Pack B with an explicit blocking.
    pub fn with_block_size(
        trans: MatrixOp,
        k: usize,
        n: usize,
        alpha: f32,
        src: &[f32],
        ld: usize,
        block_size: BlockSize,
    ) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidDimension { dim: "k", value: k });
        }
        if n == 0 {
            return Err(Error::InvalidDimension { dim: "n", value: n });
        }
        block_size.validate()?;
        let view = StridedMatrix::new("B", trans, k, n, src, ld)?;

        let requested = block_size;
        let block_size = block_size.clamp_to(k, n);
        let num_block_rows = k.div_ceil(block_size.rows);
        let num_block_cols = n.div_ceil(block_size.cols);
        let len = num_block_rows
            .checked_mul(num_block_cols)
            .and_then(|blocks| blocks.checked_mul(block_size.num_elements()))
            .ok_or(Error::InvalidBlockSize {
                rows: requested.rows,
                cols: requested.cols,
            })?;
        let mut data = vec![f16::ZERO; len];

        for jb in 0..num_block_cols {
            let j0 = jb * block_size.cols;
            let cols = block_size.cols.min(n - j0);
            for kb in 0..num_block_rows {
                let k0 = kb * block_size.rows;
                let rows = block_size.rows.min(k - k0);
                let offset = (jb * num_block_rows + kb) * block_size.num_elements();
                let block = &mut data[offset..offset + block_size.num_elements()];

                for r in 0..rows {
                    let out = &mut block[r * block_size.cols..r * block_size.cols + cols];
                    for (c, slot) in out.iter_mut().enumerate() {
                        *slot = f32_to_f16(alpha * view.at(k0 + r, j0 + c));
                    }
                }
            }
        }

        log::debug!(
            "packed fp16 B: k={} n={} trans={:?} alpha={} blocks={}x{} of {}x{} ({} bytes)",
            k,
            n,
            trans,
            alpha,
            num_block_rows,
            num_block_cols,
            block_size.rows,
            block_size.cols,
            len * std::mem::size_of::<f16>()
        );

        Ok(Self {
            data,
            k,
            n,
            trans,
            alpha,
            block_size,
            num_block_rows,
            num_block_cols,
        })
    }

    /// Rows of the logical B (the contraction dimension k).
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.k
    }

    /// Columns of the logical B (n).
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.n
    }

    /// Layout of the source this matrix was packed from.
    #[inline]
    pub fn trans(&self) -> MatrixOp {
        self.trans
    }

    /// Scale baked into every stored value.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Blocking used for the packed buffer, already clamped to (k × n).
    #[inline]
    pub fn block_size(&self) -> BlockSize {
        self.block_size
    }

    #[inline]
    pub fn num_block_rows(&self) -> usize {
        self.num_block_rows
    }

    #[inline]
    pub fn num_block_cols(&self) -> usize {
        self.num_block_cols
    }

    /// Elements in the packed buffer, padding included.
    #[inline]
    pub fn packed_len(&self) -> usize {
        self.data.len()
    }

    pub fn size_in_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<f16>()
    }

    /// Packed block at block coordinates (kb, jb).
    #[inline]
    pub(crate) fn block(&self, kb: usize, jb: usize) -> &[f16] {
        let len = self.block_size.num_elements();
        let offset = (jb * self.num_block_rows + kb) * len;
        &self.data[offset..offset + len]
    }

    /// Stored value of logical B[row, col], widened back to f32.
    ///
    /// Returns `None` outside the (k × n) shape.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.k || col >= self.n {
            return None;
        }
        let BlockSize { rows, cols } = self.block_size;
        let block = self.block(row / rows, col / cols);
        Some(f16_to_f32(block[(row % rows) * cols + col % cols]))
    }

    /// Unpack to a dense row-major (k × n) f32 matrix.
    ///
    /// The result holds exactly what the kernel multiplies by: alpha
    /// applied and rounded to half precision.
    pub fn unpack(&self) -> Vec<f32> {
        let BlockSize { rows, cols } = self.block_size;
        let mut out = vec![0.0f32; self.k * self.n];
        for jb in 0..self.num_block_cols {
            let j0 = jb * cols;
            let width = cols.min(self.n - j0);
            for kb in 0..self.num_block_rows {
                let k0 = kb * rows;
                let depth = rows.min(self.k - k0);
                let block = self.block(kb, jb);
                for r in 0..depth {
                    let dst = (k0 + r) * self.n + j0;
                    for c in 0..width {
                        out[dst + c] = f16_to_f32(block[r * cols + c]);
                    }
                }
            }
        }
        out
    }
}
