//! Criterion benchmarks: pack cost, packed compute, and the f32 baseline.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fp16gemm::matrix::reference::matmul_fp_ref;
use fp16gemm::{MatrixOp, PackedGemmMatrixF16, gemm_compute};

// (m, n, k): small-batch inference shapes against square-ish weights
const SHAPES: [(usize, usize, usize); 4] = [
    (1, 1024, 1024),
    (8, 1024, 1024),
    (64, 512, 512),
    (100, 1024, 256),
];

fn inputs(m: usize, n: usize, k: usize) -> (Vec<f32>, Vec<f32>) {
    let a: Vec<f32> = (0..m * k).map(|i| (i % 100) as f32 * 0.01).collect();
    let b: Vec<f32> = (0..k * n).map(|i| (i % 37) as f32 * 0.05 - 0.9).collect();
    (a, b)
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_fp16");
    for &(_, n, k) in &SHAPES[..1] {
        let (_, b) = inputs(1, n, k);
        group.throughput(Throughput::Elements((k * n) as u64));
        for trans in [MatrixOp::NoTranspose, MatrixOp::Transpose] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", trans), format!("{}x{}", k, n)),
                &b,
                |bencher, b| {
                    bencher.iter(|| {
                        PackedGemmMatrixF16::new(trans, k, n, 1.0, black_box(b)).unwrap()
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("gemm");
    for &(m, n, k) in &SHAPES {
        let (a, b) = inputs(m, n, k);
        let label = format!("{}x{}x{}", m, n, k);
        group.throughput(Throughput::Elements((2 * m * n * k) as u64));

        let packed = PackedGemmMatrixF16::new(MatrixOp::NoTranspose, k, n, 1.0, &b).unwrap();
        let mut out = vec![0.0f32; m * n];
        group.bench_function(BenchmarkId::new("fp16_packed", &label), |bencher| {
            bencher.iter(|| {
                gemm_compute(
                    MatrixOp::NoTranspose,
                    m,
                    black_box(&a),
                    k,
                    &packed,
                    0.0,
                    &mut out,
                    n,
                )
                .unwrap()
            })
        });

        group.bench_function(BenchmarkId::new("f32_reference", &label), |bencher| {
            bencher.iter(|| matmul_fp_ref(m, n, k, k, n, n, black_box(&a), &b, &mut out))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pack, bench_compute);
criterion_main!(benches);
