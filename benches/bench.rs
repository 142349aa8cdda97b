//! Criterion benchmarks for the etymon preparation pipeline.
//!
//! Covers:
//! - Id canonicalization
//! - Graph building with shared ancestor chains
//! - Search-key normalization

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use etymon::analysis::normalize_text;
use etymon::dataset::WordEntry;
use etymon::graph::GraphBuilder;
use etymon::lexicon::canonicalize_id;
use etymon::search_index::build_search_index;

const CODES: &[&str] = &["E", "L", "OE", "PIE", "PGer", "OF", "G", "Unami"];

/// Generate entries whose chains overlap, like the real dataset.
fn generate_entries(count: usize) -> Vec<WordEntry> {
    (0..count)
        .map(|i| {
            let word = format!("word{i}_E");
            let parent = format!("root{}_{}", i % 97, CODES[i % CODES.len()]);
            let ancestor = format!("/*anc{}/_PIE", i % 13);
            WordEntry::new(word.clone())
                .with_link(word, parent.clone())
                .with_link(parent, ancestor)
        })
        .collect()
}

/// Benchmark raw token canonicalization.
fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");
    let tokens = ["mouse (n.)_E", "/manet:u/_Unami", "colour_E/color_E", "  "];

    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("mixed_tokens", |b| {
        b.iter(|| {
            for token in &tokens {
                black_box(canonicalize_id(black_box(token)));
            }
        })
    });
    group.finish();
}

/// Benchmark graph building and search index projection.
fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    let entries = generate_entries(10_000);

    group.throughput(Throughput::Elements(entries.len() as u64));
    group.bench_function("build_10k_entries", |b| {
        b.iter(|| {
            let mut builder = GraphBuilder::default();
            builder.add_entries(black_box(&entries));
            black_box(builder.finish())
        })
    });

    let mut builder = GraphBuilder::default();
    builder.add_entries(&entries);
    let graph = builder.finish().graph;
    group.bench_function("search_index_projection", |b| {
        b.iter(|| black_box(build_search_index(black_box(&graph))))
    });
    group.finish();
}

/// Benchmark diacritic stripping.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let texts = [
        "Café French",
        "probāre Latin",
        "Ἀθῆναι Greek",
        "mouse (n.) English",
    ];

    group.bench_function("mixed_scripts", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(normalize_text(black_box(text)));
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_canonicalize,
    bench_graph_build,
    bench_normalize
);
criterion_main!(benches);
