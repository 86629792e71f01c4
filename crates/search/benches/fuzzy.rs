//! Benchmarks for fuzzy matching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use devjobs_search::{fuzzy_contains, levenshtein_distance, normalize};

const HEADLINES: &[&str] = &[
    "Senior React Developer till växande team i Stockholm",
    "Java Backend Engineer - Malmö",
    "Fullstack-utvecklare C#/.NET",
    "Frontend Developer med fokus på TypeScript",
    "DevOps Engineer, Kubernetes och AWS",
];

fn bench_levenshtein(c: &mut Criterion) {
    c.bench_function("levenshtein_short", |b| {
        b.iter(|| levenshtein_distance(black_box("react"), black_box("reakt")))
    });

    c.bench_function("levenshtein_long", |b| {
        b.iter(|| {
            levenshtein_distance(
                black_box("systemutvecklare"),
                black_box("mjukvaruutvecklare"),
            )
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_headline", |b| {
        b.iter(|| normalize(black_box("Senior C#/.NET-utvecklare till Göteborg!")))
    });
}

fn bench_fuzzy_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy_contains");

    for query in ["react", "reakt stockholm", "fullstack utvecklare"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, q| {
            b.iter(|| {
                HEADLINES
                    .iter()
                    .filter(|h| fuzzy_contains(black_box(h), black_box(q)))
                    .count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_normalize, bench_fuzzy_contains);
criterion_main!(benches);
