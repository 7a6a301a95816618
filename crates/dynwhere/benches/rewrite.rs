//! Rewrite Performance Benchmarks
//!
//! Measures the placeholder scan, argument collection and cleanup passes
//! across the template shapes seen in production filters.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dynwhere::{params, rewrite};

fn bench_scalar_rewrites(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_rewrites");

    let query = "SELECT * FROM users WHERE ?name AND ?age AND ?email AND ?country";
    let all_present = params! {
        "name" => "Jane",
        "age" => 25,
        "email" => "jane@example.com",
        "country" => "Japan",
    };

    group.bench_function("four_params_present", |b| {
        b.iter(|| black_box(rewrite(black_box(query), &all_present)))
    });

    // All conditions vanish, exercising the marker expansion and cleanup
    let none_present = params! {};
    group.bench_function("four_params_missing", |b| {
        b.iter(|| black_box(rewrite(black_box(query), &none_present)))
    });

    let half_present = params! { "name" => "Jane", "email" => "jane@example.com" };
    group.bench_function("two_of_four_present", |b| {
        b.iter(|| black_box(rewrite(black_box(query), &half_present)))
    });

    group.finish();
}

fn bench_in_list_rewrites(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_list_rewrites");

    for &len in &[1usize, 10, 100] {
        let ids: Vec<i64> = (0..len as i64).collect();
        let params = params! { "ids" => ids };

        group.bench_with_input(BenchmarkId::new("array_len", len), &len, |b, _| {
            b.iter(|| black_box(rewrite(black_box("SELECT * FROM users WHERE ?ids"), &params)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scalar_rewrites, bench_in_list_rewrites);
criterion_main!(benches);
