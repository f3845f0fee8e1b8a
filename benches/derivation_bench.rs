use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tablechart::ChartEngine;
use tablechart::api::{build_category_series, build_histogram_series};
use tablechart::core::{CellValue, ChartRequest, ChartType, Record, Table};

fn synthetic_table(rows: usize) -> Table {
    let records: Vec<Record> = (0..rows)
        .map(|i| {
            let mut record = Record::new();
            record.insert(
                "region".to_owned(),
                CellValue::from(format!("region-{}", i % 25)),
            );
            record.insert("sales".to_owned(), CellValue::from(format!("{}.5", i % 997)));
            record.insert("score".to_owned(), CellValue::Number((i % 613) as f64));
            record
        })
        .collect();
    Table::from_records(records)
}

fn bench_category_aggregation_10k(c: &mut Criterion) {
    let table = synthetic_table(10_000);

    c.bench_function("category_aggregation_10k", |b| {
        b.iter(|| {
            let _ = build_category_series(black_box(&table), black_box("region"), black_box("sales"))
                .expect("aggregation should succeed");
        })
    });
}

fn bench_histogram_binning_10k(c: &mut Criterion) {
    let table = synthetic_table(10_000);

    c.bench_function("histogram_binning_10k", |b| {
        b.iter(|| {
            let _ = build_histogram_series(
                black_box(&table),
                black_box("score"),
                black_box(None),
                black_box(10),
            )
            .expect("binning should succeed");
        })
    });
}

fn bench_engine_batch_derivation(c: &mut Criterion) {
    let table = synthetic_table(10_000);
    let engine = ChartEngine::default();
    let requests = vec![
        ChartRequest::new(
            ChartType::Bar,
            "region",
            Some("sales".to_owned()),
            "sales by region",
        ),
        ChartRequest::new(
            ChartType::Scatter,
            "score",
            Some("sales".to_owned()),
            "score vs sales",
        ),
        ChartRequest::new(ChartType::Histogram, "score", None, "score distribution"),
    ];

    c.bench_function("engine_batch_derivation_10k", |b| {
        b.iter(|| {
            let results = engine.derive_all(black_box(&table), black_box(&requests));
            for result in results {
                let _ = result.expect("derivation should succeed");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_category_aggregation_10k,
    bench_histogram_binning_10k,
    bench_engine_batch_derivation
);
criterion_main!(benches);
