//! # Relation Engine Benchmarks
//!
//! Performance benchmarks for closure, induction and ordering enumeration.
//!
//! Run with: `cargo bench -p unidisc-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use unidisc_core::{EntityId, InductionChecker, RelationStore, TopoEnumerator};

/// Create a store where each course requires the previous one.
fn create_chain(size: usize) -> RelationStore {
    let mut store = RelationStore::with_size(size);
    for i in 1..size {
        store.add_prereq(EntityId(i - 1), EntityId(i));
    }
    store
}

/// Create a store where course 0 is a prerequisite of every other course.
fn create_star(size: usize) -> RelationStore {
    let mut store = RelationStore::with_size(size);
    for i in 1..size {
        store.add_prereq(EntityId(0), EntityId(i));
    }
    store
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_prereq_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("prereq_closure");

    for size in [50, 100, 200].iter() {
        let store = create_chain(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(store.prereq_closure()));
        });
    }

    group.finish();
}

fn bench_strong_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_strong");

    for size in [50, 100, 200].iter() {
        let store = create_chain(*size);
        let completed = vec![true; *size];
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let checker = InductionChecker::new(&store);
            b.iter(|| black_box(checker.check_strong(EntityId(size - 1), &completed)));
        });
    }

    group.finish();
}

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_orders");

    for size in [8, 12, 16].iter() {
        let store = create_star(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let enumerator = TopoEnumerator::new(&store);
            b.iter(|| black_box(enumerator.enumerate(size, 200)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_prereq_closure,
    bench_strong_check,
    bench_enumeration
);
criterion_main!(benches);
