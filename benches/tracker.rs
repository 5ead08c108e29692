//! Micro-benchmarks for the time-value primitives and check operations.
//!
//! Every operation here is a handful of integer compares and adds; these
//! benches exist to catch accidental regressions (an allocation, a branch
//! explosion) rather than to chase nanoseconds.
//!
//! Run: `cargo bench --bench tracker`

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use timetrack::{TimeTracker, TimeVal};

fn bench_timeval(c: &mut Criterion) {
    let a = TimeVal::new(1, 900_000);
    let b = TimeVal::new(2, 200_000);

    c.bench_function("timeval/add_with_carry", |bench| {
        bench.iter(|| black_box(black_box(a) + black_box(b)));
    });

    c.bench_function("timeval/cmp", |bench| {
        bench.iter(|| black_box(black_box(a).cmp(&black_box(b))));
    });

    c.bench_function("timeval/from_micros", |bench| {
        bench.iter(|| black_box(TimeVal::from_micros(black_box(86_399_999_999))));
    });
}

fn bench_checks(c: &mut Criterion) {
    c.bench_function("tracker/is_timed_out", |bench| {
        let mut tracker = TimeTracker::with_timeout(TimeVal::from_secs(5));
        let mut micros = 0_i64;
        bench.iter(|| {
            micros += 1;
            black_box(tracker.is_timed_out(TimeVal::from_micros(micros)))
        });
    });

    c.bench_function("tracker/is_timed_out_fixed", |bench| {
        let mut tracker = TimeTracker::with_timeout(TimeVal::from_secs(5));
        let mut micros = 0_i64;
        bench.iter(|| {
            micros += 1;
            black_box(tracker.is_timed_out_fixed(TimeVal::from_micros(micros)))
        });
    });

    c.bench_function("tracker/is_expired", |bench| {
        let tracker = TimeTracker::with_timeout(TimeVal::from_secs(5));
        bench.iter(|| black_box(tracker.is_expired(black_box(TimeVal::new(4, 999_999)))));
    });
}

criterion_group!(benches, bench_timeval, bench_checks);
criterion_main!(benches);
