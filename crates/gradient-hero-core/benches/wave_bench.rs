//! Benchmarks for the per-frame bar computation
//!
//! Run with: cargo bench -p gradient-hero-core
//!
//! One animation frame evaluates the wave function once per bar; these
//! benchmarks keep that well under the 50ms tick budget.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gradient_hero_core::wave::WaveGeometry;
use gradient_hero_core::{wave_height, BarField};

fn bench_wave_height(c: &mut Criterion) {
    c.bench_function("wave_height_single", |b| {
        b.iter(|| black_box(wave_height(black_box(7), black_box(15), black_box(12.34))))
    });
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for count in [15usize, 60, 240] {
        let field = BarField::new(count, WaveGeometry::default());
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &field, |b, field| {
            b.iter(|| {
                let total: f64 = field.bars(black_box(3.21)).map(|bar| bar.scale_y()).sum();
                black_box(total)
            })
        });
    }

    group.finish();
}

criterion_group!(wave_benches, bench_wave_height, bench_frame);
criterion_main!(wave_benches);
