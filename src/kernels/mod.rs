//! Microkernels for the inner loop of matrix multiplication.
//!
//! A kernel computes one small tile of C from rows of A and one packed B
//! block. It's called by the blocked GEMM driver after B has been packed
//! into cache-friendly blocks.
//!
//! Available kernels:
//! - `kernel_fp16`: MR×NR tile, f16 B widened to f32 per row
//!   (written as plain loops over fixed-size arrays so the compiler can
//!   keep the tile in vector registers)

pub mod kernel_fp16;
