use criterion::{criterion_group, criterion_main, Criterion};

use prettypaint::paints::artist_pigments;
use prettypaint::{Mixer, Palette};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixing");

    // The one-time table work: resampling, premultiplication, luminosity.
    group.bench_function("table-setup", |b| {
        b.iter(|| Mixer::new(artist_pigments()).unwrap())
    });

    // The per-palette pipeline against prepared tables.
    let mixer = Mixer::new(artist_pigments()).unwrap();
    let palette = Palette::new().with("White", 0.5).with("Cobalt Blue", 0.5);

    group.bench_function("mix", |b| b.iter(|| mixer.mix(&palette).unwrap()));

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
