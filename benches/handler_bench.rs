//! Benchmarks for launchboard chart handlers
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use launchboard::charts::{payload_correlation, success_proportion};
use launchboard::dataset::{LaunchRecord, LaunchTable, Outcome};
use launchboard::reactive::{
    standard_registry, FilterState, PayloadRange, SiteSelection, SUCCESS_PAYLOAD_SCATTER_CHART,
    SUCCESS_PIE_CHART,
};

fn create_test_table(count: usize) -> LaunchTable {
    let sites = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
    let categories = ["v1.0", "v1.1", "FT", "B4", "B5"];

    let records = (0..count)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                sites[i % sites.len()],
                (i % 10_000) as f64,
                outcome,
                categories[i % categories.len()],
            )
        })
        .collect();

    LaunchTable::from_records(records).unwrap()
}

fn bench_proportion(c: &mut Criterion) {
    let mut group = c.benchmark_group("proportion");

    for size in [100, 1000, 10000] {
        let table = create_test_table(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_sites_{}", size), |b| {
            b.iter(|| success_proportion(black_box(&table), &SiteSelection::AllSites))
        });

        let site = SiteSelection::Site("KSC LC-39A".to_string());
        group.bench_function(format!("single_site_{}", size), |b| {
            b.iter(|| success_proportion(black_box(&table), black_box(&site)))
        });
    }

    group.finish();
}

fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation");

    for size in [100, 1000, 10000] {
        let table = create_test_table(size);
        let range = PayloadRange::new(0.0, 10_000.0);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_sites_{}", size), |b| {
            b.iter(|| {
                payload_correlation(black_box(&table), &SiteSelection::AllSites, black_box(&range))
            })
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    let table = create_test_table(1000);
    let registry = standard_registry();
    let filter = FilterState::new(SiteSelection::AllSites, PayloadRange::new(0.0, 10_000.0));

    group.bench_function("pie_chart", |b| {
        b.iter(|| {
            registry
                .dispatch(black_box(SUCCESS_PIE_CHART), &table, &filter)
                .unwrap()
        })
    });

    group.bench_function("scatter_chart", |b| {
        b.iter(|| {
            registry
                .dispatch(black_box(SUCCESS_PAYLOAD_SCATTER_CHART), &table, &filter)
                .unwrap()
        })
    });

    group.bench_function("serialize_scatter", |b| {
        let spec = registry
            .dispatch(SUCCESS_PAYLOAD_SCATTER_CHART, &table, &filter)
            .unwrap();
        b.iter(|| serde_json::to_string(black_box(&spec)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_proportion, bench_correlation, bench_dispatch);
criterion_main!(benches);
