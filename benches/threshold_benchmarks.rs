/// Performance benchmarks for threshold computation
///
/// Run with: cargo bench
///
/// Tracks the cost spread between the closed-form bound, the heuristic, and
/// the exact DP as the error budget grows.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use qthresh::engine::{compute_threshold, Algorithm, DistanceModel};
use qthresh::shape::Shape;

fn bench_hamming_algorithms(c: &mut Criterion) {
    let shape = Shape::parse("1100101").unwrap();
    let mut group = c.benchmark_group("hamming");

    for errors in [1u32, 2, 4] {
        for (name, algorithm) in [
            ("lemma", Algorithm::Lemma),
            ("apx", Algorithm::Heuristic),
            ("exact", Algorithm::Exact),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, errors),
                &errors,
                |b, &errors| {
                    b.iter(|| {
                        compute_threshold(
                            black_box(&shape),
                            100,
                            errors,
                            DistanceModel::Hamming,
                            algorithm,
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_edit_exact(c: &mut Criterion) {
    let shape = Shape::parse("101001011").unwrap();
    let mut group = c.benchmark_group("edit");
    group.sample_size(20); // the exact DP dominates wall time here

    for errors in [2u32, 4] {
        group.bench_with_input(
            BenchmarkId::new("exact", errors),
            &errors,
            |b, &errors| {
                b.iter(|| {
                    compute_threshold(
                        black_box(&shape),
                        60,
                        errors,
                        DistanceModel::Edit,
                        Algorithm::Exact,
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_hamming_algorithms, bench_edit_exact);
criterion_main!(benches);
