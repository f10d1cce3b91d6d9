#![allow(dead_code)]

use fp16gemm::MatrixOp;
use fp16gemm::matrix::reference::matmul_fp_ref;
use fp16gemm::matrix::transpose::to_row_major;
use fp16gemm::precision::round_to_f16;
use rand::Rng;

/// Stored buffer for a logical (rows × cols) operand.
pub struct Operand {
    pub data: Vec<f32>,
    pub ld: usize,
}

pub fn random_values<R: Rng>(rng: &mut R, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.gen_range(-4.0f32..4.0)).collect()
}

pub fn random_operand<R: Rng>(rng: &mut R, op: MatrixOp, rows: usize, cols: usize) -> Operand {
    Operand {
        data: random_values(rng, rows * cols),
        ld: op.dense_ld(rows, cols),
    }
}

/// Dense row-major copy of the logical matrix.
pub fn logical(op: MatrixOp, rows: usize, cols: usize, stored: &[f32]) -> Vec<f32> {
    to_row_major(op, rows, cols, stored, op.dense_ld(rows, cols)).unwrap()
}

/// Oracle: A × round_trip(alpha · B), all dense row-major.
pub fn oracle(m: usize, n: usize, k: usize, alpha: f32, a: &[f32], b: &[f32]) -> Vec<f32> {
    let b_rounded: Vec<f32> = b.iter().map(|&x| round_to_f16(alpha * x)).collect();
    let mut c = vec![0.0; m * n];
    matmul_fp_ref(m, n, k, k, n, n, a, &b_rounded, &mut c);
    c
}

/// Bit-for-bit comparison, reporting the first differing (row, col).
pub fn assert_bits_equal(expected: &[f32], actual: &[f32], n: usize, name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            expected[i].to_bits() == actual[i].to_bits(),
            "{}: results differ at ({}, {}): ref {} fp16 gemm {}",
            name,
            i / n,
            i % n,
            expected[i],
            actual[i]
        );
    }
}
