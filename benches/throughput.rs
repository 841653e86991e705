use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use bookcat::{
    book::Book,
    core::store::Catalog,
    persist::flatfile::{parse_catalog, render_catalog},
};

fn book(i: u64) -> Book {
    Book::new(format!("Volume {i} of the Collected Works"), "Anonymous", format!("978{i:010}"))
}

fn filled(n: u64) -> Catalog {
    let mut catalog = Catalog::new();
    for i in 0..n {
        catalog.push(book(i));
    }
    catalog
}

fn bench_inserts(c: &mut Criterion) {
    c.bench_function("catalog_insert_unique_50k", |b| {
        b.iter(|| {
            let mut catalog = Catalog::new();
            for i in 0..50_000u64 {
                let _ = catalog.insert_unique(book(i)).expect("insert");
            }
        });
    });
}

fn bench_isbn_lookup(c: &mut Criterion) {
    let catalog = filled(50_000);
    c.bench_function("catalog_find_by_isbn_50k", |b| {
        b.iter(|| {
            for i in (0..50_000u64).step_by(97) {
                let _ = catalog.find_by_isbn(&format!("978{i:010}"));
            }
        });
    });
}

fn bench_title_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("title_search");
    for n in [1_000u64, 10_000, 50_000] {
        let catalog = filled(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &catalog, |b, catalog| {
            b.iter(|| {
                let _ = catalog.search_by_title("VOLUME 42");
            });
        });
    }
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let catalog = filled(10_000);
    let body = render_catalog(catalog.list_all());
    c.bench_function("flatfile_render_10k", |b| {
        b.iter(|| render_catalog(catalog.list_all()));
    });
    c.bench_function("flatfile_parse_10k", |b| {
        b.iter(|| parse_catalog(&body));
    });
}

criterion_group!(benches, bench_inserts, bench_isbn_lookup, bench_title_search, bench_codec);
criterion_main!(benches);
