//! Criterion benchmarks for the estimator.
//!
//! Benchmarks:
//! 1. Single estimate per preset
//! 2. Full assessment (estimate + recommendations + impacts + fingerprint)
//! 3. Default age curve (83 estimates)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lifespan_core::{age_curve, assess, compute_life_expectancy, Preset, ProfileInput, DEFAULT_AGES};

fn profile() -> ProfileInput {
    ProfileInput {
        age: 50,
        body_mass_index: 32.0,
        smokes: true,
        drinks_alcohol: true,
        daily_step_count: 3000,
        stress_level: 9.0,
    }
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    let input = profile();
    for preset in Preset::ALL {
        let config = preset.config();
        group.bench_with_input(BenchmarkId::from_parameter(preset), &config, |b, config| {
            b.iter(|| compute_life_expectancy(black_box(&input), black_box(config)))
        });
    }
    group.finish();
}

fn bench_assess(c: &mut Criterion) {
    let input = profile();
    let config = Preset::AgeAdjusted.config();
    c.bench_function("assess", |b| {
        b.iter(|| assess(black_box(&input), black_box(&config)))
    });
}

fn bench_curve(c: &mut Criterion) {
    let input = profile();
    let config = Preset::Classic.config();
    c.bench_function("age_curve_18_100", |b| {
        b.iter(|| age_curve(black_box(&input), black_box(&config), DEFAULT_AGES))
    });
}

criterion_group!(benches, bench_estimate, bench_assess, bench_curve);
criterion_main!(benches);
