//! Cache-blocked half-precision GEMM.
//!
//! B is packed once into f16 blocks sized for L1/L2 cache, then any number
//! of compute calls stream those blocks through the MR×NR microkernel.
//!
//! - `packed_fp16`: the packed B matrix
//! - `gemm_fp16`: the compute driver over packed B

pub mod gemm_fp16;
pub mod packed_fp16;

use crate::error::{Error, Result};
use crate::kernels::kernel_fp16::NR;

/// Default rows per block (k direction). 256 × 16 halves = 8 KiB per block.
pub const KC: usize = 256;

/// Packing geometry. Columns are capped at the kernel tile width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockSize {
    /// Rows per block, along k.
    pub rows: usize,
    /// Columns per block, along n.
    pub cols: usize,
}

impl BlockSize {
    /// Block of `rows` along k by `cols` along n. Checked by [`validate`](Self::validate).
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Elements in one block, saturating at `usize::MAX`.
    #[inline]
    pub const fn num_elements(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// The same block shrunk to cover at most a (k × n) matrix, so small
    /// matrices are not padded out to a full block.
    #[inline]
    pub fn clamp_to(&self, k: usize, n: usize) -> Self {
        Self::new(self.rows.min(k), self.cols.min(n))
    }

    /// Rejects empty blocks, blocks wider than the kernel tile and blocks
    /// whose element count overflows `usize`.
    pub fn validate(&self) -> Result<()> {
        let too_large = self.rows.checked_mul(self.cols).is_none();
        if self.rows == 0 || self.cols == 0 || self.cols > NR || too_large {
            return Err(Error::InvalidBlockSize {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        Self::new(KC, NR)
    }
}
