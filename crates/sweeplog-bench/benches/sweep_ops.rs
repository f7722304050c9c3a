//! Criterion benchmarks for recording sweeps and extracting slices.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sweeplog_array::GridSpec;
use sweeplog_bench::{labelled_grid, reference_sweep, stress_sweep};
use sweeplog_monitor::{ExhaustiveLog, LogConfig};
use sweeplog_slice::extract_slice_2d;
use sweeplog_test_utils::fixtures::QuadraticBowl;

/// Benchmark: record the full 1323-step reference sweep.
fn bench_record_reference(c: &mut Criterion) {
    let sweep = reference_sweep();
    let bowl = QuadraticBowl::new(vec![0.0, 0.0, 1.0]);

    c.bench_function("record_reference_1323", |b| {
        b.iter(|| {
            let mut log = ExhaustiveLog::<f64>::new();
            log.set_center(sweep.center());
            let outcome = sweep.run(&mut log, |p| bowl.evaluate(p)).unwrap();
            black_box(outcome.min_value);
        });
    });
}

/// Benchmark: record the stress sweep with and without coverage tracking.
fn bench_record_stress(c: &mut Criterion) {
    let sweep = stress_sweep();
    let bowl = QuadraticBowl::new(vec![0.0, 0.0, 0.0]);
    let mut group = c.benchmark_group("record_stress_112k");
    group.sample_size(10);

    for track_coverage in [true, false] {
        let name = if track_coverage { "tracked" } else { "untracked" };
        group.bench_function(name, |b| {
            b.iter(|| {
                let config = LogConfig {
                    track_coverage,
                    ..LogConfig::default()
                };
                let mut log = ExhaustiveLog::<f64>::with_config(config).unwrap();
                log.set_center(sweep.center());
                let outcome = sweep.run(&mut log, |p| bowl.evaluate(p)).unwrap();
                black_box(outcome.steps);
            });
        });
    }
    group.finish();
}

/// Benchmark: extract a 101x11 slice from the stress-sized grid.
fn bench_slice_stress(c: &mut Criterion) {
    let spec = GridSpec::centered(&[0.0, 0.0, 0.0], &[50, 50, 5], &[0.02, 0.2, 0.2]).unwrap();
    let grid = labelled_grid(&spec).unwrap();

    c.bench_function("slice_2d_101x11", |b| {
        b.iter(|| {
            let s = extract_slice_2d(&grid, &[0.0, 0.0, 0.0], &[false, true, true]).unwrap();
            black_box(s.len());
        });
    });
}

criterion_group!(
    benches,
    bench_record_reference,
    bench_record_stress,
    bench_slice_stress
);
criterion_main!(benches);
