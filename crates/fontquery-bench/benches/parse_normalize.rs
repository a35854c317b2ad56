//! Group 1: parse, normalize and group benchmarks.
#![allow(clippy::expect_used)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fontquery_bench::{SizeTier, generate_dataset};
use fontquery_core::{NormalizeOptions, group_by_resolution, normalize, parse_dataset};

const TIERS: [(&str, SizeTier); 4] = [
    ("S", SizeTier::Small),
    ("M", SizeTier::Medium),
    ("L", SizeTier::Large),
    ("XL", SizeTier::XLarge),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, tier) in TIERS {
        let dataset = generate_dataset(&tier.config(42));
        let json = serde_json::to_string(&dataset).expect("serialize");

        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("json", name), &json, |b, json| {
            b.iter(|| black_box(parse_dataset(json).expect("parse")));
        });
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let options = NormalizeOptions::default();

    for (name, tier) in TIERS {
        let dataset = generate_dataset(&tier.config(42));

        group.throughput(Throughput::Elements(dataset.fonts.len() as u64));
        group.bench_with_input(BenchmarkId::new("records", name), &dataset, |b, dataset| {
            b.iter(|| black_box(normalize(dataset, &options).expect("normalize")));
        });
    }
    group.finish();
}

fn bench_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by_resolution");

    for (name, tier) in TIERS {
        let dataset = generate_dataset(&tier.config(42));
        let table = normalize(&dataset, &NormalizeOptions::default()).expect("normalize");

        group.throughput(Throughput::Elements(table.len() as u64));
        group.bench_with_input(BenchmarkId::new("entries", name), &table, |b, table| {
            b.iter(|| black_box(group_by_resolution(table)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_normalize, bench_group);
criterion_main!(benches);
