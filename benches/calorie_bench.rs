// ABOUTME: Criterion benchmarks for workout dispatch and calorie calculations
// ABOUTME: Measures model construction, summary computation, and text formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the calorie models.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use workout_tracker::dispatcher::{demo_packages, read_package};
use workout_tracker::formatters::SummaryFormatter;

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");
    for package in demo_packages() {
        let model = package.read().unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(&package.workout_type),
            &model,
            |b, model| b.iter(|| black_box(model).summary()),
        );
    }
    group.finish();
}

fn bench_dispatch_and_format(c: &mut Criterion) {
    let formatter = SummaryFormatter::default();
    c.bench_function("dispatch_and_format_run", |b| {
        b.iter(|| {
            let model = read_package(black_box("RUN"), black_box(&[15000.0, 1.0, 75.0])).unwrap();
            formatter.format(&model.summary())
        });
    });
}

criterion_group!(benches, bench_summary, bench_dispatch_and_format);
criterion_main!(benches);
