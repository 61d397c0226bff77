use criterion::{criterion_group, criterion_main, Criterion};
use rewear::db::fixtures;
use rewear::models::Item;
use rewear::services::ItemFilter;
use std::hint::black_box;

fn benchmark_browse_filter(c: &mut Criterion) {
    // Grow the seed catalog to a few thousand listings
    let seed = fixtures::items();
    let items: Vec<Item> = (0..500)
        .flat_map(|round| {
            seed.iter().cloned().map(move |mut item| {
                item.id = format!("{round}-{}", item.id);
                item
            })
        })
        .collect();

    let everything = ItemFilter::default();
    let narrow = ItemFilter::default()
        .search("denim")
        .category("Outerwear")
        .size("M");
    let no_match = ItemFilter::default().search("tuxedo");

    let mut group = c.benchmark_group("browse_filter");

    group.bench_function("all", |b| b.iter(|| everything.apply(black_box(&items))));

    group.bench_function("search_and_facets", |b| {
        b.iter(|| narrow.apply(black_box(&items)))
    });

    group.bench_function("search_no_match", |b| {
        b.iter(|| no_match.apply(black_box(&items)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_browse_filter);
criterion_main!(benches);
