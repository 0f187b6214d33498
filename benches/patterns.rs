use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ldml_number::{compile_pattern, get_format, get_formatter, get_parser, PatternCache, Separators};

const PATTERNS: [&str; 4] = ["#", "#,##0.00", "$ #,##0.##;($ #,##0.##)", "#0.#%"];

fn benchmark_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    for pattern in PATTERNS {
        group.bench_with_input(BenchmarkId::from_parameter(pattern), pattern, |b, pattern| {
            b.iter(|| compile_pattern(black_box(pattern)))
        });
    }

    group.finish();
}

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for pattern in PATTERNS {
        let formatter = get_formatter(pattern, Separators::default()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(pattern), &formatter, |b, f| {
            b.iter(|| f.format(black_box(-1234567.891)))
        });
    }

    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for pattern in PATTERNS {
        let formatter = get_formatter(pattern, Separators::default()).unwrap();
        let parser = get_parser(pattern, Separators::default()).unwrap();
        let text = formatter.format(-1234567.891);
        group.bench_with_input(BenchmarkId::from_parameter(pattern), &text, |b, text| {
            b.iter(|| parser.parse(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_get_format(c: &mut Criterion) {
    let formatter = get_formatter("$ #,##0.##;($ #,##0.##)", Separators::default()).unwrap();
    c.bench_function("get_format_pattern_formatter", |b| {
        b.iter(|| get_format(black_box(&formatter)))
    });

    let to_string = |value: f64| value.to_string();
    c.bench_function("get_format_closure", |b| {
        b.iter(|| get_format(black_box(&to_string)))
    });
}

fn benchmark_cached_formatter(c: &mut Criterion) {
    let cache = PatternCache::new();
    c.bench_function("cached_formatter_lookup", |b| {
        b.iter(|| cache.formatter(black_box("#,##0.00"), Separators::default()))
    });
}

criterion_group!(
    benches,
    benchmark_compile,
    benchmark_format,
    benchmark_parse,
    benchmark_get_format,
    benchmark_cached_formatter
);
criterion_main!(benches);
