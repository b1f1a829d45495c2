// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use plinth_core::num::div::{float, int};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

const NUM_PAIRS: usize = 4096;

fn int_pairs() -> Vec<(i64, i64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xd1f0);
    (0..NUM_PAIRS)
        .map(|_| {
            let dividend = rng.gen_range(-1_000_000_i64..=1_000_000);
            let mut divisor = rng.gen_range(-1_000_i64..=1_000);
            if divisor == 0 {
                divisor = 1;
            }
            (dividend, divisor)
        })
        .collect()
}

fn float_pairs() -> Vec<(f64, f64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xf10a7);
    (0..NUM_PAIRS)
        .map(|_| {
            let dividend = rng.gen_range(-1.0e6_f64..=1.0e6);
            let mut divisor = rng.gen_range(-1.0e3_f64..=1.0e3);
            if divisor == 0.0 {
                divisor = 1.0;
            }
            (dividend, divisor)
        })
        .collect()
}

fn bench_integer_division(c: &mut Criterion) {
    let pairs = int_pairs();
    let mut group = c.benchmark_group("integer_division");
    group.throughput(Throughput::Elements(NUM_PAIRS as u64));

    let conventions: [(&str, fn(i64, i64) -> i64); 3] = [
        ("truncated", int::div_truncated::<i64>),
        ("floored", int::div_floored::<i64>),
        ("euclidean", int::div_euclidean::<i64>),
    ];

    for (name, divide) in conventions {
        group.bench_with_input(BenchmarkId::new("quotient", name), &pairs, |b, pairs| {
            b.iter(|| {
                let mut acc = 0_i64;
                for &(n, d) in pairs {
                    acc = acc.wrapping_add(divide(black_box(n), black_box(d)));
                }
                acc
            })
        });
    }

    let moduli: [(&str, fn(i64, i64) -> i64); 3] = [
        ("truncated", int::mod_truncated::<i64>),
        ("floored", int::mod_floored::<i64>),
        ("euclidean", int::mod_euclidean::<i64>),
    ];

    for (name, modulus) in moduli {
        group.bench_with_input(BenchmarkId::new("modulus", name), &pairs, |b, pairs| {
            b.iter(|| {
                let mut acc = 0_i64;
                for &(n, d) in pairs {
                    acc = acc.wrapping_add(modulus(black_box(n), black_box(d)));
                }
                acc
            })
        });
    }

    group.finish();
}

fn bench_float_division(c: &mut Criterion) {
    let pairs = float_pairs();
    let mut group = c.benchmark_group("float_division");
    group.throughput(Throughput::Elements(NUM_PAIRS as u64));

    let conventions: [(&str, fn(f64, f64) -> f64); 3] = [
        ("truncated", float::div_truncated::<f64>),
        ("floored", float::div_floored::<f64>),
        ("euclidean", float::div_euclidean::<f64>),
    ];

    for (name, divide) in conventions {
        group.bench_with_input(BenchmarkId::new("quotient", name), &pairs, |b, pairs| {
            b.iter(|| {
                let mut acc = 0.0_f64;
                for &(n, d) in pairs {
                    acc += divide(black_box(n), black_box(d));
                }
                acc
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_integer_division, bench_float_division);
criterion_main!(benches);
