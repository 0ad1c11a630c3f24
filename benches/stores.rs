//! Benchmarks for campfire
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use campfire::{escape, mustache, EventType, ListStore, Store};
use std::collections::HashMap;

// =============================================================================
// STORE BENCHMARKS
// =============================================================================

fn bench_store_update_no_subscribers(c: &mut Criterion) {
    let store = Store::new(0u64);
    c.bench_function("store_update_no_subscribers", |b| {
        b.iter(|| store.update(black_box(42)))
    });
}

fn bench_store_update_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_update_fanout");
    for subscribers in [1usize, 10, 100] {
        let store = Store::new(0u64);
        for _ in 0..subscribers {
            store.on(EventType::Update, |v| { black_box(*v); }, false);
        }
        group.bench_with_input(
            BenchmarkId::from_parameter(subscribers),
            &subscribers,
            |b, _| b.iter(|| store.update(black_box(7))),
        );
    }
    group.finish();
}

fn bench_subscribe_unsubscribe(c: &mut Criterion) {
    let store = Store::new(0u64);
    c.bench_function("subscribe_unsubscribe", |b| {
        b.iter(|| {
            let h = store.on(EventType::Update, |_| {}, false);
            store.unsubscribe(EventType::Update, h)
        })
    });
}

// =============================================================================
// LIST STORE BENCHMARKS
// =============================================================================

fn bench_list_push_with_subscriber(c: &mut Criterion) {
    c.bench_function("list_push_1000", |b| {
        b.iter(|| {
            let list = ListStore::new(Vec::with_capacity(1000));
            list.on(EventType::Push, |p| { black_box(p.change()); }, false);
            for i in 0..1000u32 {
                list.push(i);
            }
            black_box(list.len())
        })
    });
}

fn bench_list_set_at(c: &mut Criterion) {
    let list = ListStore::new(vec![0u32; 256]);
    list.on(EventType::Mutation, |p| { black_box(p.change()); }, false);
    c.bench_function("list_set_at", |b| {
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 1) % 256;
            list.set_at(i, black_box(1)).ok()
        })
    });
}

// =============================================================================
// TEMPLATING BENCHMARKS
// =============================================================================

fn bench_mustache(c: &mut Criterion) {
    let data = HashMap::from([("name", "Ada"), ("lang", "Rust"), ("year", "1843")]);
    let text = "<p>{{ name }} wrote about {{lang}} in {{ year }}, not {{ missing }}</p>".repeat(20);
    c.bench_function("mustache_60_placeholders", |b| {
        b.iter(|| mustache(black_box(&text), &data))
    });
}

fn bench_escape(c: &mut Criterion) {
    let text = r#"<a href="/x?a=1&b=2">it's "quoted"</a>"#.repeat(50);
    c.bench_function("escape_2kb", |b| b.iter(|| escape(black_box(&text))));
}

criterion_group!(
    benches,
    bench_store_update_no_subscribers,
    bench_store_update_fanout,
    bench_subscribe_unsubscribe,
    bench_list_push_with_subscriber,
    bench_list_set_at,
    bench_mustache,
    bench_escape,
);
criterion_main!(benches);
