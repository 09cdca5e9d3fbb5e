//! Benchmarks for blog rendering
//!
//! Run with: cargo bench -p digibazzar-core
//!
//! Establishes baselines for:
//! - Listing re-render at different catalog sizes
//! - Article synthesis and Markdown rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use digibazzar_core::{render_listing, synthesize, PostCatalog, PostRecord};

fn catalog_of(n: usize) -> PostCatalog {
    PostCatalog::new(
        (0..n)
            .map(|i| {
                PostRecord::new(
                    format!("Post {}", i),
                    "SEO",
                    "Jan 01, 2025",
                    "orange",
                    "https://images.example/p?w=600&q=80",
                    "Teaser",
                )
            })
            .collect(),
    )
}

// ============================================================================
// Listing Benchmarks
// ============================================================================

fn bench_render_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_listing");

    for size in [50usize, 500, 5000] {
        let catalog = catalog_of(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(render_listing(catalog, catalog.len())))
        });
    }

    group.finish();
}

// ============================================================================
// Article Benchmarks
// ============================================================================

fn bench_synthesize(c: &mut Criterion) {
    c.bench_function("synthesize_article", |b| {
        b.iter(|| black_box(synthesize("Technical SEO Checklist", "SEO")))
    });

    let article = synthesize("Technical SEO Checklist", "SEO");
    c.bench_function("article_to_markdown", |b| {
        b.iter(|| black_box(article.to_markdown()))
    });
}

criterion_group!(benches, bench_render_listing, bench_synthesize);
criterion_main!(benches);
