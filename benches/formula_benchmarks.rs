//! Benchmarks for package dispatch and the workout formulas

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fitstats::formulas::summarize;
use fitstats::{read_package, run_packages, sample_packages, RunOptions};

fn bench_summarize(c: &mut Criterion) {
    let workouts: Vec<_> = sample_packages()
        .iter()
        .map(|package| read_package(&package.code, &package.fields).unwrap())
        .collect();

    c.bench_function("summarize_sample_workouts", |b| {
        b.iter(|| {
            for workout in &workouts {
                black_box(summarize(black_box(workout)));
            }
        })
    });
}

fn bench_text_report(c: &mut Criterion) {
    let packages = sample_packages();

    c.bench_function("text_report_sample_packages", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(512);
            run_packages(black_box(&packages), RunOptions::default(), &mut out).unwrap();
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_summarize, bench_text_report);
criterion_main!(benches);
