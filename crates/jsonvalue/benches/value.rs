use std::hint::black_box;

use ahash::RandomState;
use codspeed_criterion_compat::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonvalue::{JsonValue, Number};

fn document(width: usize, depth: usize) -> JsonValue {
    if depth == 0 {
        return JsonValue::if_present(Some(JsonValue::Number(Number::FloatingPoint(1.0))));
    }
    (0..width)
        .map(|idx| {
            let value = if idx % 2 == 0 {
                document(width, depth - 1)
            } else {
                (0..width)
                    .map(|item| JsonValue::Number(Number::UnsignedInteger(item as u64)))
                    .collect()
            };
            (format!("key{idx}"), value)
        })
        .collect()
}

fn run_benchmarks(c: &mut Criterion) {
    let state = RandomState::with_seeds(1, 2, 3, 4);
    for (width, depth) in [(4, 2), (8, 3), (16, 3)] {
        let lhs = document(width, depth);
        let rhs = lhs.clone();
        let parameter = format!("{width}x{depth}");
        c.bench_with_input(BenchmarkId::new("value/eq", &parameter), &(&lhs, &rhs), |b, (lhs, rhs)| {
            b.iter(|| black_box(lhs == rhs));
        });
        c.bench_with_input(BenchmarkId::new("value/hash", &parameter), &lhs, |b, value| {
            b.iter(|| black_box(state.hash_one(value)));
        });
    }
    let numbers = [
        Number::Integer(-42),
        Number::UnsignedInteger(42),
        Number::FloatingPoint(42.0),
        Number::FloatingPoint(42.5),
    ];
    c.bench_function("number/eq/mixed", |b| {
        b.iter(|| {
            let mut count = 0;
            for lhs in &numbers {
                for rhs in &numbers {
                    count += usize::from(black_box(lhs) == black_box(rhs));
                }
            }
            count
        });
    });
}

criterion_group!(value, run_benchmarks);
criterion_main!(value);
