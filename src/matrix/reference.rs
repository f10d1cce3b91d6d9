/// Reference matrix multiplication: C = A * B, i-j-k loop order.
///
/// This is the textbook triple loop in plain f32 with no blocking and no
/// reduced precision. Each output is summed into a local starting at zero
/// with `p` ascending, then stored, so C's previous contents are ignored.
///
/// Use this as a correctness oracle, not for performance. To compare
/// against a packed half-precision multiply, round B through
/// [`crate::precision::round_to_f16`] first.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major, leading dimension `lda`
/// * `b` - Matrix B (k × n), row-major, leading dimension `ldb`
/// * `c` - Matrix C (m × n), row-major, leading dimension `ldc`, overwritten
#[allow(clippy::too_many_arguments)]
pub fn matmul_fp_ref(
    m: usize,
    n: usize,
    k: usize,
    lda: usize,
    ldb: usize,
    ldc: usize,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) {
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0f32;
            for p in 0..k {
                sum += a[i * lda + p] * b[p * ldb + j];
            }
            c[i * ldc + j] = sum;
        }
    }
}
