use crate::common::{configure_criterion, load_user, validate_user};
use criterion::{criterion_group, BenchmarkId, Criterion};
use simple_result::{Error, Outcome, TypedOutcome};
use std::hint::black_box;

pub fn bench_then_success_path(c: &mut Criterion) {
    c.bench_function("chain/then_success", |b| {
        b.iter(|| {
            black_box(
                load_user(black_box(7))
                    .then(|user| validate_user(&user).then_map(|| user.user_id))
                    .then_map(|id| id * 2),
            )
        })
    });
}

pub fn bench_then_short_circuit(c: &mut Criterion) {
    c.bench_function("chain/then_short_circuit", |b| {
        b.iter(|| {
            black_box(
                load_user(black_box(10))
                    .then(|user| validate_user(&user).then_map(|| user.user_id))
                    .then_map(|id| id * 2),
            )
        })
    });
}

pub fn bench_then_on_fail_recovery(c: &mut Criterion) {
    c.bench_function("chain/then_on_fail_recovery", |b| {
        b.iter(|| {
            black_box(load_user(black_box(20)).then_on_fail_with(|errors| {
                TypedOutcome::ok(crate::common::UserData::new(errors.len() as u64))
            }))
        })
    });
}

pub fn bench_chain_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain/depth");

    for depth in [5, 20, 100] {
        group.bench_with_input(BenchmarkId::new("success", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut outcome = TypedOutcome::ok(0u64);
                for _ in 0..depth {
                    outcome = outcome.then_map(|n| n + 1);
                }
                black_box(outcome)
            })
        });

        group.bench_with_input(BenchmarkId::new("failure", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut outcome = TypedOutcome::<u64>::fail("early failure");
                for _ in 0..depth {
                    outcome = outcome.then_map(|n| n + 1);
                }
                black_box(outcome)
            })
        });
    }
    group.finish();
}

pub fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain/merge");

    for count in [10, 100] {
        let outcomes: Vec<Outcome> = (0..count)
            .map(|i| {
                if i % 3 == 0 {
                    Outcome::fail(Error::new("check failed").with_metadata("index", i as u64))
                } else {
                    Outcome::ok()
                }
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &outcomes, |b, outcomes| {
            b.iter(|| black_box(Outcome::merge(outcomes.iter().cloned())))
        });
    }
    group.finish();
}

criterion_group! {
    name = chain_benches;
    config = configure_criterion();
    targets =
        bench_then_success_path,
        bench_then_short_circuit,
        bench_then_on_fail_recovery,
        bench_chain_depth,
        bench_merge,
}
