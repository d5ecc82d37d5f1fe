use arrlisp::{parse, tokenize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn program(forms: usize) -> String {
    (0..forms)
        .map(|i| format!("(define (f{i} x) (+ (* x {i}) \"label {i}\" {i}.5))\n"))
        .collect()
}

fn lexer_benchmark(c: &mut Criterion) {
    let source = program(100);

    c.bench_function("tokenize 100 forms", |b| {
        b.iter(|| tokenize(black_box(&source)).unwrap())
    });
}

fn parser_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for forms in [1, 10, 100].iter() {
        let source = program(*forms);
        group.bench_with_input(BenchmarkId::new("forms", forms), &source, |b, source| {
            b.iter(|| parse(black_box(source)).unwrap())
        });
    }

    let nested = format!("{}x{}", "(".repeat(500), ")".repeat(500));
    group.bench_function("nested 500", |b| {
        b.iter(|| parse(black_box(&nested)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, lexer_benchmark, parser_benchmark);
criterion_main!(benches);
