//! Benchmark for container pipelines.
//!
//! Compares `pipe!` pipelines over `Optional` and `Either` against the
//! equivalent hand-written `match` code, and measures the overhead of
//! `AsyncResult::sequence` as the number of computations grows.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use railway::control::{Either, Error, ErrorEither, Optional, either, optional};
use railway::effect::AsyncResult;
use railway::pipe;
use std::hint::black_box;

// =============================================================================
// Optional Pipelines
// =============================================================================

fn benchmark_optional_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_pipeline");

    group.bench_function("pipe_present", |bencher| {
        bencher.iter(|| {
            black_box(pipe!(
                Optional::from_nullable(black_box(Some(5))),
                optional::map(|x: i32| x + 3),
                optional::filter(|x: &i32| *x > 0),
                optional::get_or_else(|| 0)
            ))
        });
    });

    group.bench_function("manual_present", |bencher| {
        bencher.iter(|| {
            let value = match black_box(Some(5)) {
                Some(x) if x + 3 > 0 => x + 3,
                _ => 0,
            };
            black_box(value)
        });
    });

    group.finish();
}

// =============================================================================
// Either Pipelines
// =============================================================================

fn check_age(age: u32) -> ErrorEither<u32> {
    Either::from_predicate(age, |age| *age >= 21, || Error::new("too young"))
}

fn benchmark_either_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_chain");

    for chain_length in [1, 5, 10] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chain_length),
            &chain_length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut result: Either<String, i32> = Either::Right(0);
                    for _ in 0..length {
                        result = result.chain(|x| Either::Right(x + 1));
                    }
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_either_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_short_circuit");

    for age in [8_u32, 23] {
        group.bench_with_input(BenchmarkId::new("age_gate", age), &age, |bencher, &age| {
            bencher.iter(|| {
                black_box(pipe!(
                    black_box(age),
                    check_age,
                    either::map(|age: u32| age * 2),
                    either::fold(|_: Error| 0, |age| age)
                ))
            });
        });
    }

    group.bench_function("try_catch_error_right", |bencher| {
        bencher.iter(|| black_box(Either::try_catch_error(|| black_box(6) * 7)));
    });

    group.finish();
}

// =============================================================================
// AsyncResult
// =============================================================================

fn benchmark_async_sequence(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("async_result_sequence");

    for size in [1, 10, 100] {
        let computations: Vec<AsyncResult<Error, usize>> = (0..size)
            .map(|index| AsyncResult::try_catch_error(move || async move { Ok::<_, Error>(index) }))
            .collect();
        let concurrent = AsyncResult::sequence(computations.clone());
        let sequential = AsyncResult::sequence_sequential(computations);

        group.bench_with_input(BenchmarkId::new("concurrent", size), &concurrent, |bencher, all| {
            bencher.to_async(&runtime).iter(|| async { black_box(all.run().await) });
        });

        group.bench_with_input(BenchmarkId::new("sequential", size), &sequential, |bencher, all| {
            bencher.to_async(&runtime).iter(|| async { black_box(all.run().await) });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_optional_pipeline,
    benchmark_either_chain,
    benchmark_either_short_circuit,
    benchmark_async_sequence
);

criterion_main!(benches);
