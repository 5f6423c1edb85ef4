//! Criterion benchmarks for bindo.
//!
//! Covers the hot paths of a run:
//! - Raw-unit analysis
//! - Frequency counting and ranking
//! - N-gram phrase extraction

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use bindo::analysis::analyzer::{Analyzer, RawUnitAnalyzer};
use bindo::frequency::{FrequencyTable, NgramExtractor};

/// Generate a pseudo-random token sequence over a small Korean vocabulary.
fn generate_tokens(count: usize) -> Vec<String> {
    let words = [
        "하늘", "가을", "바람", "구름", "바다", "노을", "들판", "호수", "달빛", "별빛", "나무",
        "강물", "산길", "마을", "도시", "기차", "편지", "사람", "시간", "기억", "노래", "꿈",
        "봄날", "겨울", "여름", "새벽", "저녁", "골목", "창문", "우산", "그림자", "발자국",
    ];

    (0..count)
        .map(|i| words[(i * 7 + i / 13) % words.len()].to_string())
        .collect()
}

/// Benchmark raw-unit analysis of a corpus.
fn bench_raw_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_analysis");

    let analyzer = RawUnitAnalyzer::new(1, 15).unwrap();
    let text = generate_tokens(10_000).join(" ");

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("analyze_corpus", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&text)).unwrap().collect();
            black_box(tokens)
        })
    });

    group.finish();
}

/// Benchmark counting and ranking.
fn bench_frequency(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency");

    for size in [1_000, 10_000, 100_000] {
        let tokens = generate_tokens(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("count", size), &tokens, |b, tokens| {
            b.iter(|| black_box(FrequencyTable::from_tokens(tokens.iter())))
        });

        let table = FrequencyTable::from_tokens(tokens.iter());
        group.bench_with_input(BenchmarkId::new("top_50", size), &table, |b, table| {
            b.iter(|| black_box(table.top_n(50)))
        });
    }

    group.finish();
}

/// Benchmark n-gram phrase extraction.
fn bench_ngram(c: &mut Criterion) {
    let mut group = c.benchmark_group("ngram");

    let tokens = generate_tokens(50_000);
    group.throughput(Throughput::Elements(tokens.len() as u64));

    for n in [2, 3] {
        let extractor = NgramExtractor::new(n).unwrap();
        group.bench_with_input(BenchmarkId::new("extract", n), &tokens, |b, tokens| {
            b.iter(|| black_box(extractor.extract(tokens, 5)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_raw_analysis, bench_frequency, bench_ngram);
criterion_main!(benches);
