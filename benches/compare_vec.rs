#[macro_use]
extern crate criterion;

use criterion::{Criterion, black_box};

use cursor_vec::Vector;

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("vector push {} values", count), |b| {
            b.iter(|| {
                let mut vec = Vector::<usize>::with_capacity(0);
                for value in 0..count {
                    vec.push(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("vector with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut vec = Vector::<usize>::with_capacity(count);
                    for value in 0..count {
                        vec.push(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("std vec push {} values", count), |b| {
            b.iter(|| {
                let mut vec = Vec::<usize>::new();
                for value in 0..count {
                    vec.push(black_box(value));
                }
            });
        });

        c.bench_function(&format!("vector insert front {} values", count), |b| {
            b.iter(|| {
                let mut vec = Vector::<usize>::with_capacity(count);
                for value in 0..count {
                    vec.insert(0, black_box(value));
                }
            });
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
