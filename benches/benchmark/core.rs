use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};
use error_trace::{trace, Code, ResultExt, TracedError};
use std::hint::black_box;

/// Construction and mutation of a single error.
pub fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/construction");

    group.bench_function("new", |b| {
        b.iter(|| black_box(TracedError::new(black_box(Code::NOT_FOUND))))
    });

    group.bench_function("new_with_fields", |b| {
        b.iter(|| {
            let err = TracedError::new(Code::INVALID)
                .with_message_args("field %s rejected", &[&"email"])
                .with_reason("format")
                .with_detail("field", "email");
            black_box(err)
        })
    });

    group.finish();
}

/// Propagation across layers.
pub fn bench_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/propagation");

    group.bench_function("trace_traced", |b| {
        b.iter_batched(
            || TracedError::new(Code::TIMEOUT).with_detail("upstream", "ledger"),
            |err| black_box(trace(err)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("or_code_foreign", |b| {
        b.iter(|| {
            let result: Result<u16, _> = black_box("port").parse::<u16>();
            black_box(result.or_code(Code::INVALID))
        })
    });

    group.bench_function("with_cause_merge", |b| {
        b.iter_batched(
            || trace(TracedError::new(Code::TIMEOUT).with_detail("a", "1")).unwrap_or_default(),
            |inner| black_box(TracedError::new(Code::TIMEOUT).with_cause(inner)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets = bench_construction, bench_propagation
}
