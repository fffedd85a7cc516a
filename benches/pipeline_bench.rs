use autostat::table::schema::{CarRecord, POWER_TO_WEIGHT, TYPE};
use autostat::table::{records_to_frame, summary_by_type_metrics};
use autostat::{CarFrameExt, HighPowerFilter, TierThresholds};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polars::prelude::DataFrame;
use rand::prelude::*;
use rand_distr::Normal;

const TYPES: [&str; 5] = ["Sedan", "SUV", "Sports", "Truck", "Wagon"];
const ORIGINS: [&str; 3] = ["USA", "Asia", "Europe"];

/// Generate a synthetic car table
fn generate_cars(size: usize, seed: u64) -> DataFrame {
    let mut rng = StdRng::seed_from_u64(seed);
    let horsepower = Normal::new(230.0, 70.0).unwrap();
    let weight = Normal::new(3500.0, 600.0).unwrap();
    let mpg = Normal::new(22.0, 5.0).unwrap();

    let records: Vec<CarRecord> = (0..size)
        .map(|i| {
            let city: f64 = mpg.sample(&mut rng);
            CarRecord {
                make: format!("Make{}", i % 40),
                model: format!("Model{i}"),
                car_type: Some(TYPES[rng.gen_range(0..TYPES.len())].to_string()),
                origin: Some(ORIGINS[rng.gen_range(0..ORIGINS.len())].to_string()),
                horsepower: Some(horsepower.sample(&mut rng).max(60.0)),
                weight: Some(weight.sample(&mut rng).max(1800.0)),
                mpg_city: Some(city.max(8.0)),
                mpg_highway: Some(city.max(8.0) + 7.0),
            }
        })
        .collect();
    records_to_frame(&records).unwrap()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pipeline");
    let filter = HighPowerFilter::default();
    let tiers = TierThresholds::default();

    for size in [100, 1_000, 10_000] {
        let cars = generate_cars(size, 42);

        group.bench_with_input(BenchmarkId::new("derive_all", size), &cars, |b, cars| {
            b.iter(|| black_box(cars).derive_all(&filter, &tiers).unwrap())
        });

        let derived = cars.derive_all(&filter, &tiers).unwrap();
        group.bench_with_input(BenchmarkId::new("aggregate", size), &derived, |b, derived| {
            b.iter(|| {
                black_box(derived)
                    .group_aggregate(TYPE, &summary_by_type_metrics())
                    .unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("rank", size), &derived, |b, derived| {
            b.iter(|| black_box(derived).sort_by(POWER_TO_WEIGHT, true).unwrap().top_n(10))
        });
    }
    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Comparison");
    for size in [100, 1_000, 10_000] {
        let labelled = generate_cars(size, 7).binary_origin_label().unwrap();
        group.bench_with_input(BenchmarkId::new("welch", size), &labelled, |b, df| {
            b.iter(|| {
                black_box(df)
                    .two_sample_test("Origin_US", &["Horsepower", "Weight"], Default::default())
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_comparison);
criterion_main!(benches);
