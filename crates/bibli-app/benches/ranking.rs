//! Ranking Comparator Benchmarks
//!
//! Measures the pure state machine over bucket sizes a heavy reader could
//! plausibly accumulate. The comparator runs once per button press, so the
//! absolute numbers only need to stay far below frame budget.

use bibli_app::workflows::ranking::{
    validate_placement, RankChoice, RankedReview, RankingComparator, StepOutcome,
};
use bibli_core::identifiers::BookId;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bucket(len: usize) -> Vec<RankedReview> {
    (0..len)
        .map(|i| RankedReview::new(BookId::new(i as i64 + 1), i as i32))
        .collect()
}

/// Drive a full binary descent: always prefer the new book.
fn descend(len: usize) {
    let mut comparator = RankingComparator::new(bucket(len));
    loop {
        if let StepOutcome::Settled(result) = comparator.apply(RankChoice::NewWins) {
            black_box(result);
            break;
        }
    }
}

fn bench_full_descent(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_descent");
    for len in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| descend(black_box(len)));
        });
    }
    group.finish();
}

fn bench_candidate_with_skips(c: &mut Criterion) {
    c.bench_function("next_index_after_skips", |b| {
        let mut comparator = RankingComparator::new(bucket(1024));
        for _ in 0..64 {
            comparator.apply(RankChoice::Skip);
        }
        b.iter(|| black_box(comparator.next_index()));
    });
}

fn bench_placement_preflight(c: &mut Criterion) {
    let bucket = bucket(4096);
    let mut comparator = RankingComparator::new(bucket.clone());
    let result = loop {
        if let StepOutcome::Settled(result) = comparator.apply(RankChoice::ExistingWins) {
            break result;
        }
    };
    c.bench_function("validate_placement", |b| {
        b.iter(|| validate_placement(black_box(&bucket), black_box(&result)));
    });
}

criterion_group!(
    benches,
    bench_full_descent,
    bench_candidate_with_skips,
    bench_placement_preflight
);
criterion_main!(benches);
