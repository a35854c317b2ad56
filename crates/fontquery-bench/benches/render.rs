//! Group 3: rendering benchmarks for every output format.
#![allow(clippy::expect_used)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fontquery_bench::{MutationConfig, SizeTier, generate_dataset, mutate_dataset};
use fontquery_core::{
    NormalizeOptions, Palette, RenderFormat, RenderLabels, diff, group_by_resolution, normalize,
};

const FORMATS: [(&str, RenderFormat); 3] = [
    ("text", RenderFormat::Text),
    ("html", RenderFormat::Html),
    ("json", RenderFormat::Json),
];

fn labels() -> RenderLabels {
    RenderLabels {
        title: "bench".to_owned(),
        image: "minimal".to_owned(),
        diff_image: "minimal".to_owned(),
    }
}

fn bench_render_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_table");

    for (name, tier) in [("M", SizeTier::Medium), ("L", SizeTier::Large)] {
        let dataset = generate_dataset(&tier.config(42));
        let table = normalize(&dataset, &NormalizeOptions::default()).expect("normalize");
        let groups = group_by_resolution(&table);

        for (format_name, format) in FORMATS {
            let renderer = format.renderer(labels(), Palette::Plain);
            let bytes: usize = renderer.render_table(&groups).map(|c| c.len()).sum();
            group.throughput(Throughput::Bytes(bytes as u64));
            group.bench_with_input(BenchmarkId::new(format_name, name), &groups, |b, groups| {
                b.iter(|| {
                    let out: String = renderer.render_table(groups).collect();
                    black_box(out)
                });
            });
        }
    }
    group.finish();
}

fn bench_render_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_diff");

    for (name, tier) in [("M", SizeTier::Medium), ("L", SizeTier::Large)] {
        let base = generate_dataset(&tier.config(42));
        let next = mutate_dataset(&base, &MutationConfig::default());
        let options = NormalizeOptions::default();
        let result = diff(
            &normalize(&base, &options).expect("normalize A"),
            &normalize(&next, &options).expect("normalize B"),
        );

        for (format_name, format) in FORMATS {
            let renderer = format.renderer(labels(), Palette::Ansi);
            let bytes: usize = renderer.render_diff(&result).map(|c| c.len()).sum();
            group.throughput(Throughput::Bytes(bytes as u64));
            group.bench_with_input(BenchmarkId::new(format_name, name), &result, |b, result| {
                b.iter(|| {
                    let out: String = renderer.render_diff(result).collect();
                    black_box(out)
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render_table, bench_render_diff);
criterion_main!(benches);
