//! Criterion benchmarks for the tip calculator.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tiptime_core::locale;
use tiptime_core::TipCalculator;

fn bench_compute(c: &mut Criterion) {
    let cases: Vec<(&str, &str, &str, bool)> = vec![
        ("empty", "", "", false),
        ("plain", "50", "18", false),
        ("rounded", "33", "10", true),
        ("invalid", "abc", "xyz", false),
        ("large", "123456789.99", "22.5", false),
    ];

    let mut group = c.benchmark_group("compute");
    for tag in ["en-US", "fr-FR", "ja-JP"] {
        let calc = TipCalculator::new(Arc::new(locale::lookup(tag).unwrap()));
        for &(name, bill, tip, round_up) in &cases {
            group.bench_with_input(
                BenchmarkId::new(tag, name),
                &(bill, tip, round_up),
                |b, &(bill, tip, round_up)| {
                    b.iter(|| calc.compute(black_box(bill), black_box(tip), round_up));
                },
            );
        }
    }
    group.finish();
}

fn bench_locale_lookup(c: &mut Criterion) {
    c.bench_function("locale_lookup", |b| {
        b.iter(|| locale::lookup(black_box("de_DE.UTF-8")));
    });
}

criterion_group!(benches, bench_compute, bench_locale_lookup);
criterion_main!(benches);
