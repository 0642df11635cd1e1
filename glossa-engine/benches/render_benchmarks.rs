//! Performance benchmarks for page rendering
//!
//! Run with: cargo bench --bench render_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glossa_core::{
    build_candidates, join_with_marker, BasicLanguage, LocatorSearch, ParsedToken, Term,
    TermCatalog, TermStatus, TokenStream,
};
use glossa_engine::{Granularity, IndexPolicy, MultiwordIndex, TextRenderer};
use std::hint::black_box;

const WORDS: [&str; 16] = [
    "el", "gato", "come", "pescado", "en", "la", "casa", "de", "mi", "abuela", "cada", "día",
    "por", "tarde", "con", "pan",
];

/// Generate a page of `words` words, ten per sentence
fn generate_page(words: usize) -> TokenStream {
    let mut parsed = Vec::with_capacity(words * 2);
    for i in 0..words {
        parsed.push(ParsedToken::new(WORDS[(i * 7 + i / 3) % WORDS.len()], true));
        if i % 10 == 9 {
            parsed.push(ParsedToken::new(".", false).end_of_sentence());
        }
        parsed.push(ParsedToken::new(" ", false));
    }
    TokenStream::from_parsed(parsed)
}

/// Generate `count` two-word terms
fn generate_catalog(count: usize) -> TermCatalog {
    let en = BasicLanguage::english();
    (0..count)
        .map(|i| {
            let a = WORDS[i % WORDS.len()];
            let b = WORDS[(i / WORDS.len() + i) % WORDS.len()];
            Term::new(&en, join_with_marker(&[a, " ", b]), TermStatus::Learning(1))
                .unwrap()
        })
        .collect()
}

/// Per-term search against the precomputed index
fn bench_candidate_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_search");
    let en = BasicLanguage::english();
    let page = generate_page(2_000);

    for terms in [16, 64, 256] {
        let catalog = generate_catalog(terms);
        let index = MultiwordIndex::build(&catalog).unwrap();

        group.throughput(Throughput::Elements(page.len() as u64));
        group.bench_with_input(BenchmarkId::new("locator", terms), &catalog, |b, catalog| {
            let search = LocatorSearch::new(catalog);
            b.iter(|| build_candidates(&en, black_box(page.tokens()), catalog, &search));
        });
        group.bench_with_input(BenchmarkId::new("index", terms), &catalog, |b, catalog| {
            b.iter(|| build_candidates(&en, black_box(page.tokens()), catalog, &index));
        });
    }

    group.finish();
}

/// Whole-page against per-sentence resolution
fn bench_granularity(c: &mut Criterion) {
    let mut group = c.benchmark_group("granularity");
    let page = generate_page(5_000);

    for (name, granularity, threads) in [
        ("page", Granularity::Page, Some(1)),
        ("sentence", Granularity::Sentence, Some(1)),
        ("sentence_parallel", Granularity::Sentence, None),
    ] {
        let renderer = TextRenderer::builder()
            .language("es")
            .granularity(granularity)
            .index_policy(IndexPolicy::Always)
            .threads(threads)
            .parallel_threshold(8)
            .build()
            .unwrap();
        let prepared = renderer.prepare(generate_catalog(128)).unwrap();

        group.throughput(Throughput::Elements(page.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| renderer.render(black_box(page.tokens()), &prepared).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_candidate_search, bench_granularity);
criterion_main!(benches);
