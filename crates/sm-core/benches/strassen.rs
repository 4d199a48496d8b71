use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sm_core::cpu::multiply;
use sm_core::{Matrix, Strassen, StrassenConfig};

const INPUT_SIZES: &[(&str, usize)] = &[("n64", 64), ("n128", 128), ("n256", 256)];
const CUTOFFS: &[usize] = &[16, 32, 64];

fn make_matrix(n: usize, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    Matrix::from_fn(n, n, |_, _| rng.gen_range(-100..100))
}

fn bench_conventional(c: &mut Criterion) {
    let mut group = c.benchmark_group("conventional");
    for &(label, n) in INPUT_SIZES {
        group.throughput(Throughput::Elements((n as u64).pow(3)));
        let a = make_matrix(n, 0xC0FF_EE42 ^ n as u64);
        let b = make_matrix(n, 0xBADC_0FFE ^ n as u64);
        group.bench_function(BenchmarkId::new("random", label), |bench| {
            bench.iter(|| black_box(multiply(black_box(&a), black_box(&b)).unwrap()));
        });
    }
    group.finish();
}

fn bench_strassen(c: &mut Criterion) {
    for &cutoff in CUTOFFS {
        let mut group = c.benchmark_group(format!("strassen_cutoff_{cutoff}"));
        for &(label, n) in INPUT_SIZES {
            group.throughput(Throughput::Elements((n as u64).pow(3)));
            let a = make_matrix(n, 0xC0FF_EE42 ^ n as u64);
            let b = make_matrix(n, 0xBADC_0FFE ^ n as u64);
            let mut engine = Strassen::new(StrassenConfig { cutoff });
            let mut out = Matrix::zeros(n, n);
            group.bench_function(BenchmarkId::new("random", label), |bench| {
                bench.iter(|| {
                    engine
                        .multiply_into(black_box(&a), black_box(&b), &mut out)
                        .unwrap();
                    black_box(out.get(n / 2, n / 2));
                });
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_conventional, bench_strassen);
criterion_main!(benches);
