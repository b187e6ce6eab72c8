// benches/expr.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use deskkit::calc::expr;

fn bench_expr(c: &mut Criterion) {
    c.bench_function("expr_short", |b| {
        b.iter(|| expr::evaluate(black_box("12+3*2")))
    });

    let long: String = (1..200).map(|i| format!("{i}*({i}+1)/2-")).collect::<String>() + "0";
    c.bench_function("expr_long", |b| {
        b.iter(|| expr::evaluate(black_box(&long)))
    });

    let nested = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    c.bench_function("expr_nested", |b| {
        b.iter(|| expr::evaluate(black_box(&nested)))
    });
}

criterion_group!(benches, bench_expr);
criterion_main!(benches);
