//! Benchmarks for the dashboard chart handlers
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use launch_dash::dashboard::{outcome_distribution, payload_correlation};
use launch_dash::data::{LaunchRecord, LaunchTable, Outcome, PayloadRange, SiteSelection};

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_test_table(count: usize) -> LaunchTable {
    let records = (0..count)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i * 37 % 10_000) as f64,
                outcome,
                BOOSTERS[i % BOOSTERS.len()],
            )
            .flight_number(i as u32 + 1)
            .booster_version(format!("F9 {} B{:04}", BOOSTERS[i % BOOSTERS.len()], i))
        })
        .collect();

    LaunchTable::from_records(records).unwrap()
}

fn bench_outcome_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("outcome_distribution");

    for size in [100, 1000, 10000] {
        let table = create_test_table(size);
        let site = SiteSelection::Site("KSC LC-39A".to_string());

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("all_sites", size), &table, |b, table| {
            b.iter(|| outcome_distribution(black_box(table), &SiteSelection::AllSites))
        });

        group.bench_with_input(BenchmarkId::new("one_site", size), &table, |b, table| {
            b.iter(|| outcome_distribution(black_box(table), &site))
        });
    }

    group.finish();
}

fn bench_payload_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_correlation");

    for size in [100, 1000, 10000] {
        let table = create_test_table(size);
        let full = table.payload_bounds();
        let narrow = PayloadRange::new(2000.0, 4000.0);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("full_range", size), &table, |b, table| {
            b.iter(|| payload_correlation(black_box(table), &SiteSelection::AllSites, full))
        });

        group.bench_with_input(BenchmarkId::new("narrow_range", size), &table, |b, table| {
            b.iter(|| payload_correlation(black_box(table), &SiteSelection::AllSites, narrow))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_outcome_distribution, bench_payload_correlation);
criterion_main!(benches);
