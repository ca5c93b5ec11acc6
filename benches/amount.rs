use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use market_schema::core::{Amount, Basis, DiscreteAmount};
use rust_decimal::Decimal;

fn benchmark_count_for(c: &mut Criterion) {
    let basis = Basis::new(100).unwrap();
    let value = Decimal::new(123_456, 3);

    c.bench_function("basis_count_for", |bench| {
        bench.iter(|| black_box(basis.count_for(black_box(value))))
    });
}

fn benchmark_decimal_of(c: &mut Criterion) {
    let cents = Basis::new(100).unwrap();
    let thirds = Basis::new(3).unwrap();

    c.bench_function("basis_decimal_of_power_of_ten", |bench| {
        bench.iter(|| black_box(cents.decimal_of(black_box(12_346))))
    });
    c.bench_function("basis_decimal_of_other", |bench| {
        bench.iter(|| black_box(thirds.decimal_of(black_box(12_346))))
    });
}

fn benchmark_compare(c: &mut Criterion) {
    let a = DiscreteAmount::new(12_346, 100).unwrap();
    let b = DiscreteAmount::new(123_461, 1_000).unwrap();
    let d = Amount::from(Decimal::new(123_455, 3));

    c.bench_function("discrete_cmp_cross_basis", |bench| {
        bench.iter(|| black_box(black_box(a) < black_box(b)))
    });
    c.bench_function("amount_cmp_mixed", |bench| {
        bench.iter(|| black_box(Amount::from(a) < black_box(d)))
    });
}

fn benchmark_batch_operations(c: &mut Criterion) {
    let values: Vec<DiscreteAmount> = (0..1000)
        .map(|i| DiscreteAmount::new(i * 1_000, 100).unwrap())
        .collect();

    let mut group = c.benchmark_group("batch_operations");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("sum_1000_same_basis", |bench| {
        bench.iter(|| {
            let mut sum = Amount::from(DiscreteAmount::new(0, 100).unwrap());
            for v in values.iter() {
                if let Some(new_sum) = sum.checked_add(&Amount::from(*v)) {
                    sum = new_sum;
                }
            }
            black_box(sum);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_count_for,
    benchmark_decimal_of,
    benchmark_compare,
    benchmark_batch_operations
);
criterion_main!(benches);
