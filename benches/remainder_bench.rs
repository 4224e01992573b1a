use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use modthree_threshold::calculate_remainder;
use std::hint::black_box;

fn bench_calculate_remainder(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_remainder");

    for len in [64, 4_096, 262_144] {
        let bits: String = (0..len)
            .map(|i| if (i * 7) % 5 < 2 { '1' } else { '0' })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &bits, |b, bits| {
            b.iter(|| calculate_remainder(black_box(bits)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calculate_remainder);
criterion_main!(benches);
