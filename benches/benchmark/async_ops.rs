use crate::common::{configure_criterion, load_user, UserData};
use criterion::{criterion_group, Criterion};
use outcome_rail::prelude_async::*;
use std::hint::black_box;
use tokio::runtime::Runtime;

async fn fetch_user(id: u64) -> Fallible<UserData> {
    load_user(id, 5)
}

pub fn bench_async_combinators(c: &mut Criterion) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(_) => return,
    };
    let mut group = c.benchmark_group("async/combinators");

    group.bench_function("success_path", |b| {
        b.iter(|| {
            rt.block_on(async {
                let name = fetch_user(black_box(3))
                    .await
                    .then_async(|user| async move { Fallible::success(user.name) })
                    .await
                    .map_async(|name| async move { name.len() })
                    .await;
                black_box(name)
            })
        })
    });

    group.bench_function("error_path", |b| {
        b.iter(|| {
            rt.block_on(async {
                let name = fetch_user(black_box(10))
                    .await
                    .then_async(|user| async move { Fallible::success(user.name) })
                    .await
                    .with_error_async(|error| async move { error.with_identifier("bench") })
                    .await;
                black_box(name)
            })
        })
    });

    group.finish();
}

pub fn bench_future_adapters(c: &mut Criterion) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(_) => return,
    };

    c.bench_function("async/future_map_value", |b| {
        b.iter(|| {
            rt.block_on(async {
                let id = fetch_user(black_box(4))
                    .map_value(|user| user.id)
                    .with_error(|error| error.with_code(1))
                    .await;
                black_box(id)
            })
        })
    });
}

criterion_group! {
    name = async_ops_benches;
    config = configure_criterion();
    targets = bench_async_combinators, bench_future_adapters
}
