//! Benchmarks for the metadata reader and the diff engine.

use config_metadata_diff::model::{Deprecation, MetadataProperty, MetadataSnapshot};
use config_metadata_diff::parsers::parse_metadata_str;
use config_metadata_diff::reports::{create_formatter_with_options, ReportFormat};
use config_metadata_diff::DiffEngine;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a release with `count` properties; `generation` shifts defaults,
/// retires every tenth property and introduces its replacement.
fn generate_snapshot(count: usize, generation: usize) -> MetadataSnapshot {
    let mut snapshot = MetadataSnapshot::new();
    for i in 0..count {
        let id = format!("app.module{}.setting-{i}", i % 50);
        let retired = generation > 0 && i % 10 == 0;
        if retired {
            snapshot.add_property(MetadataProperty::new(format!("{id}-v{generation}")));
            continue;
        }
        let mut property = MetadataProperty::new(id.clone())
            .with_type("java.lang.Integer")
            .with_description(format!("Setting number {i}. Tunes module {}.", i % 50))
            .with_default(i64::try_from(i * (generation + 1)).unwrap_or_default());
        if i % 10 == 9 {
            property = property.with_deprecation(Deprecation::replaced_by(format!("{id}-v1")));
        }
        snapshot.add_property(property);
    }
    snapshot.calculate_content_hash();
    snapshot
}

fn to_document(snapshot: &MetadataSnapshot) -> String {
    let properties: Vec<_> = snapshot
        .properties
        .values()
        .map(|p| {
            serde_json::json!({
                "id": p.id,
                "type": p.type_name,
                "description": p.description,
                "defaultValue": p.default_value,
            })
        })
        .collect();
    serde_json::json!({ "properties": properties }).to_string()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for count in [100, 1_000, 5_000] {
        let document = to_document(&generate_snapshot(count, 0));
        group.bench_with_input(BenchmarkId::from_parameter(count), &document, |b, doc| {
            b.iter(|| parse_metadata_str(black_box(doc)));
        });
    }
    group.finish();
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");
    for count in [100, 1_000, 5_000] {
        let old = generate_snapshot(count, 0);
        let new = generate_snapshot(count, 1);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &(old, new),
            |b, (old, new)| {
                let engine = DiffEngine::new();
                b.iter(|| engine.diff(black_box(old), black_box(new)));
            },
        );
    }
    group.finish();
}

fn bench_identical(c: &mut Criterion) {
    let snapshot = generate_snapshot(5_000, 0);
    c.bench_function("diff/identical_5000", |b| {
        let engine = DiffEngine::new();
        b.iter(|| engine.diff(black_box(&snapshot), black_box(&snapshot)));
    });
}

fn bench_report(c: &mut Criterion) {
    let result = DiffEngine::new()
        .diff(&generate_snapshot(1_000, 0), &generate_snapshot(1_000, 1))
        .with_versions("1.0", "2.0");
    let mut group = c.benchmark_group("report");
    for format in [ReportFormat::Asciidoc, ReportFormat::Markdown, ReportFormat::Json] {
        let formatter = create_formatter_with_options(format, false);
        group.bench_function(format.to_string(), |b| {
            b.iter(|| formatter.format_diff(black_box(&result)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_diff, bench_identical, bench_report);
criterion_main!(benches);
