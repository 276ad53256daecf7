//! Benchmarks for the compounding fold.
//!
//! Run with: cargo bench -p accrue-rates

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use accrue_core::types::Date;
use accrue_rates::{CouponCalculator, CouponRequest, RateTable};

/// Builds a table with one observation per calendar day and a slowly
/// drifting rate.
fn build_table(start: Date, days: i64) -> RateTable {
    let mut table = RateTable::new();
    for i in 0..days {
        let rate = dec!(0.0075) + Decimal::from(i % 10) * dec!(0.0001);
        table.insert(start.add_days(i), rate);
    }
    table
}

fn bench_compound_one_year(c: &mut Criterion) {
    let table = build_table(Date::from_ymd(2023, 11, 1).unwrap(), 500);
    let request = CouponRequest::new(
        dec!(1000000),
        Date::from_ymd(2024, 1, 2).unwrap(),
        Date::from_ymd(2024, 12, 31).unwrap(),
        5,
    );

    c.bench_function("compound_one_year", |b| {
        b.iter(|| CouponCalculator::compute(black_box(&request), black_box(&table)))
    });
}

criterion_group!(benches, bench_compound_one_year);
criterion_main!(benches);
