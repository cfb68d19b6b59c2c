//! Criterion benchmarks for the calculation pipeline.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use calculon_core::{
    Calculator, CalculatorFactory, CalculatorOptions, DefaultFactory, OperationType, RawInput,
};

fn operand_list(len: usize) -> String {
    (1..=len)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn bench_operations(c: &mut Criterion) {
    let calc = DefaultFactory::new().create(CalculatorOptions::default());
    let lens: Vec<usize> = vec![2, 10, 100, 1_000];

    for op in OperationType::ALL {
        let mut group = c.benchmark_group(op.name());
        for &len in &lens {
            let input = RawInput::new(operand_list(len));
            group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
                b.iter(|| calc.calculate(input, op));
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_operations);
criterion_main!(benches);
