// ABOUTME: Criterion benchmarks for package dispatch and summary rendering
// ABOUTME: Measures the full dispatch -> summarize -> format pipeline per batch size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the workout summary pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io;
use workout_tracker::dispatcher::{read_package, Package};
use workout_tracker::driver::{run_batch, DriverOptions};
use workout_tracker::formatters::format_summary;
use workout_tracker::intelligence::WorkoutMetrics;

/// Generate a mixed batch cycling through every workout code
fn generate_packages(count: usize) -> Vec<Package> {
    (0..count)
        .map(|index| {
            let steps = 1000.0 + ((index * 137) % 20_000) as f64;
            let hours = 0.5 + ((index % 7) as f64) * 0.25;
            match index % 3 {
                0 => Package::new("RUN", vec![steps, hours, 75.0]),
                1 => Package::new("WLK", vec![steps, hours, 70.0, 175.0]),
                _ => Package::new("SWM", vec![(steps / 10.0).floor(), hours, 80.0, 25.0, 40.0]),
            }
        })
        .collect()
}

fn bench_single_summary(c: &mut Criterion) {
    c.bench_function("summarize_walking", |b| {
        b.iter(|| {
            let workout = read_package(black_box("WLK"), black_box(&[9000.0, 1.0, 75.0, 180.0]));
            workout
                .and_then(|w| w.summarize())
                .map(|summary| format_summary(&summary))
        });
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_batch");
    for size in [10_usize, 100, 1000] {
        let packages = generate_packages(size);
        let report = run_batch(&packages, &DriverOptions::default(), &mut io::sink());
        assert_eq!(report.map(|r| r.processed).ok(), Some(size), "bench batch must decode cleanly");
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &packages, |b, packages| {
            b.iter(|| run_batch(packages, &DriverOptions::default(), &mut io::sink()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_summary, bench_batch);
criterion_main!(benches);
