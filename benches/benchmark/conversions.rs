use crate::common::{configure_criterion, load_user};
use criterion::{criterion_group, Criterion};
use outcome_rail::convert::{fallible_to_outcome, maybe_to_fallible};
use outcome_rail::{Error, Fallible, Maybe, OptionExt, ResultExt};
use std::hint::black_box;
use std::io;

pub fn bench_from_std_result(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions/from_std_result");

    group.bench_function("ok", |b| {
        b.iter(|| {
            let result: Result<u64, io::Error> = Ok(black_box(42));
            black_box(Fallible::from_std_result(result))
        })
    });

    group.bench_function("err", |b| {
        b.iter(|| {
            let result: Result<u64, io::Error> =
                Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
            black_box(result.ctx("reading config"))
        })
    });

    group.finish();
}

pub fn bench_std_error_translation(c: &mut Criterion) {
    let source = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
    let own = Error::new("already translated").with_code(9);

    c.bench_function("conversions/translate_foreign", |b| {
        b.iter(|| black_box(Error::from_std_error(black_box(&source))))
    });
    c.bench_function("conversions/translate_own", |b| {
        b.iter(|| black_box(Error::from_std_error(black_box(&own))))
    });
}

pub fn bench_container_conversions(c: &mut Criterion) {
    c.bench_function("conversions/option_into_maybe", |b| {
        b.iter(|| {
            let maybe: Maybe<u64> = black_box(Some(5_u64)).into_maybe();
            black_box(maybe_to_fallible(maybe))
        })
    });

    c.bench_function("conversions/fallible_to_outcome", |b| {
        b.iter(|| black_box(fallible_to_outcome(load_user(black_box(6), 3))))
    });
}

criterion_group! {
    name = conversion_benches;
    config = configure_criterion();
    targets = bench_from_std_result, bench_std_error_translation, bench_container_conversions
}
