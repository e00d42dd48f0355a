use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use tristate::datatype::{Integer, Text};
use tristate::specialize::{identity, parse_signature, IteratorOf, PairOf, Registry, Signature, Specialized};
use tristate::value::Value;

pub fn criterion_benchmark(c: &mut Criterion) {
    let a = Integer::of(40);
    let b = Integer::of(2);
    let unset = Integer::new();
    c.bench_function("integer add", |bench| bench.iter(|| black_box(&a).add(black_box(&b))));
    c.bench_function("integer add unset", |bench| {
        bench.iter(|| black_box(&a).add(black_box(&unset)))
    });

    let left = Text::of("transitional");
    let right = Text::of("traditional");
    c.bench_function("text fuzzy", |bench| bench.iter(|| black_box(&left).fuzzy(black_box(&right))));

    let args = [Signature::concrete("String"), Signature::concrete("Integer")];
    c.bench_function("identity flat", |bench| bench.iter(|| identity(black_box("Pair"), black_box(&args))));
    let nested = parse_signature("Iterator of Pair of (String, Iterator of Pair of (String, Integer))").unwrap();
    c.bench_function("identity nested", |bench| {
        bench.iter(|| tristate::specialize::Identity::of(black_box(&nested)))
    });
    c.bench_function("descriptor parse", |bench| {
        bench.iter(|| parse_signature(black_box("Pair of (String, Iterator of Integer)")))
    });

    let mut registry = Registry::new();
    registry.register::<PairOf<Text, Integer>>().unwrap();
    c.bench_function("registry hit", |bench| {
        bench.iter(|| registry.register::<PairOf<Text, Integer>>())
    });
    let name = PairOf::<Text, Integer>::name();
    c.bench_function("registry by name", |bench| bench.iter(|| registry.by_name(black_box(&name))));

    for n in [1usize, 1000, 100000] {
        c.bench_function(&format!("iterate {}", n), |bench| {
            bench.iter(|| {
                let mut it: IteratorOf<Integer> = (0..n as i64).map(Integer::of).collect();
                let mut sum = Integer::of(0);
                while it.has_next().is_true() {
                    if let Ok(v) = it.next() {
                        sum.pipe(&v);
                    }
                }
                sum
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
