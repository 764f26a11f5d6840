use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::distr::{Distribution, Uniform};
use rand::{rngs::StdRng, SeedableRng};
use single_sparse::{load_str, save_to_string, SparseMatrix};
use std::time::Duration;

fn create_test_matrix(rows: i64, cols: i64, entries: usize, seed: u64) -> SparseMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = SparseMatrix::new(rows, cols).unwrap();
    let value_dist = Uniform::try_from(1..1_000i64).unwrap();
    let row_dist = Uniform::try_from(0..rows).unwrap();
    let col_dist = Uniform::try_from(0..cols).unwrap();

    for _ in 0..entries {
        matrix
            .set(
                row_dist.sample(&mut rng),
                col_dist.sample(&mut rng),
                value_dist.sample(&mut rng),
            )
            .unwrap();
    }
    matrix
}

pub fn bench_text_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("Text_Format");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for &entries in &[1_000usize, 100_000] {
        let matrix = create_test_matrix(50_000, 50_000, entries, 42);
        let text = save_to_string(&matrix).unwrap();

        group.bench_with_input(BenchmarkId::new("save", entries), &entries, |b, _| {
            b.iter(|| save_to_string(&matrix).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("load", entries), &entries, |b, _| {
            b.iter(|| load_str(&text).unwrap());
        });
    }
    group.finish();
}

criterion_group!(io_benches, bench_text_format);
criterion_main!(io_benches);
