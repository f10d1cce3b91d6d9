//! Half-precision weight GEMM in Rust: f16 B, f32 A and C.
//!
//! Inference multiplies the same weight matrix against many activation
//! matrices. This crate packs the weights (B) once into cache-sized
//! half-precision blocks with alpha baked in, then computes
//! `C = op(A) · B + beta · C` against that packed form as often as needed.
//! A, C and the accumulators stay f32; only B's storage is narrowed.
//!
//! ## Usage
//!
//! ```
//! use fp16gemm::{MatrixOp, PackedGemmMatrixF16, gemm_compute};
//!
//! let (m, n, k) = (2, 3, 4);
//! let a = vec![1.0f32; m * k];
//! let b = vec![0.5f32; k * n];
//! let mut c = vec![0.0f32; m * n];
//!
//! let packed = PackedGemmMatrixF16::new(MatrixOp::NoTranspose, k, n, 1.0, &b)?;
//! gemm_compute(MatrixOp::NoTranspose, m, &a, k, &packed, 0.0, &mut c, n)?;
//!
//! assert_eq!(c, vec![2.0; m * n]);
//! # Ok::<(), fp16gemm::Error>(())
//! ```
//!
//! For a one-off product there's [`multiply`], which packs and computes in
//! one call.
//!
//! ## Numerics
//!
//! B is rounded to half precision (ties to even) when packed. Results are
//! exactly those of a plain f32 triple loop run on the rounded B, which is
//! what [`matrix::reference::matmul_fp_ref`] plus
//! [`precision::round_to_f16`] compute.

pub mod blocked;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod precision;

pub use blocked::BlockSize;
pub use blocked::gemm_fp16::{gemm_compute, gemm_compute_mnk};
pub use blocked::packed_fp16::PackedGemmMatrixF16;
pub use error::{Error, Result};
pub use matrix::layout::MatrixOp;

/// Matrix multiply: C = A * B, with B rounded to half precision
///
/// Packs B and runs the blocked kernel once. Matrices are row-major and
/// dense: A is m×k, B is k×n, C is m×n. C is overwritten.
///
/// When B is reused, build a [`PackedGemmMatrixF16`] once instead.
///
/// # Errors
///
/// Zero dimensions or slices shorter than the given shape.
pub fn multiply(a: &[f32], b: &[f32], c: &mut [f32], m: usize, n: usize, k: usize) -> Result<()> {
    let packed = PackedGemmMatrixF16::new(MatrixOp::NoTranspose, k, n, 1.0, b)?;
    gemm_compute(MatrixOp::NoTranspose, m, a, k, &packed, 0.0, c, n)
}
