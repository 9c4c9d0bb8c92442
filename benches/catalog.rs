// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for catalog operations.
//!
//! Measures the performance of:
//! - Product lookup by code in a session-sized catalog
//! - Storefront price formatting

use criterion::{criterion_group, criterion_main, Criterion};
use mascarada::catalog::{format_money, Catalog, Product, ProductId};
use std::hint::black_box;

/// Build a catalog the size of a full seasonal lineup.
fn session_catalog() -> Catalog {
    let products = (0..60u32)
        .map(|n| Product {
            id: ProductId::new(format!("M{n:02}")),
            name: format!("Máscara {n}"),
            price: 15_000.0 + f64::from(n) * 500.0,
            price2: 25_000.0 + f64::from(n) * 500.0,
            images: vec![format!("img/mask-{n}.jpg")],
        })
        .collect();
    Catalog::from_products(products)
}

/// Benchmark product lookup by code.
///
/// Lookup is a linear scan over the snapshot, so first, last, and absent
/// codes bound the cost range.
fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    let catalog = session_catalog();
    let first = ProductId::new("M00");
    let last = ProductId::new("M59");
    let missing = ProductId::new("ZZZ");

    group.bench_function("find_first", |b| {
        b.iter(|| black_box(catalog.find(black_box(&first))));
    });

    group.bench_function("find_last", |b| {
        b.iter(|| black_box(catalog.find(black_box(&last))));
    });

    group.bench_function("find_missing", |b| {
        b.iter(|| black_box(catalog.find(black_box(&missing))));
    });

    group.finish();
}

/// Benchmark storefront price formatting.
fn bench_format_money(c: &mut Criterion) {
    let mut group = c.benchmark_group("money");

    group.bench_function("format_grouped", |b| {
        b.iter(|| black_box(format_money(black_box(45_000.0))));
    });

    group.bench_function("format_fractional", |b| {
        b.iter(|| black_box(format_money(black_box(1_234.5))));
    });

    group.finish();
}

criterion_group!(benches, bench_find, bench_format_money);
criterion_main!(benches);
