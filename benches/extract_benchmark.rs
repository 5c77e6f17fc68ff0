//! Benchmarks for pdfstruct extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the pipeline over synthetic report text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pdfstruct::{ExtractOptions, TextExtractor};

/// Creates synthetic report text with the given number of sections.
fn create_test_text(section_count: usize) -> String {
    let mut text = String::new();

    for i in 0..section_count {
        text.push_str(&format!("SECTION {}\n", i + 1));
        text.push_str(&format!("Prepared By: Team {}\n", i % 7));
        text.push_str(&format!("Report Date: March {}, 2024\n\n", i % 28 + 1));

        // Table run
        text.push_str("Region    Q1    Q2    Q3\n");
        for row in 0..5 {
            text.push_str(&format!(
                "Area{}    {}    {}.5    {}\n",
                row,
                100 + i + row,
                80 + row,
                60 + i
            ));
        }
        text.push('\n');

        // List run
        text.push_str("- review numbers\n- follow up on 04/01/2024\n* publish by 2024-04-15\n\n");
        text.push_str("Body text with a few numbers like 42 and 3.14 mixed into prose.\n\n");
    }

    text
}

/// Benchmark line classification.
fn bench_classify(c: &mut Criterion) {
    let lines = [
        "Region    Q1    Q2    Q3",
        "- review numbers",
        "QUARTERLY SUMMARY",
        "Body text with a few numbers like 42 and 3.14 mixed into prose.",
    ];

    c.bench_function("classify_lines", |b| {
        b.iter(|| {
            for line in lines.iter() {
                black_box(pdfstruct::extract::classify(black_box(line)));
            }
        });
    });
}

/// Benchmark full extraction at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let extractor = TextExtractor::new(ExtractOptions::default()).unwrap();

    for section_count in [1, 10, 100].iter() {
        let text = create_test_text(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| extractor.extract(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark pattern compilation per extractor.
fn bench_extractor_creation(c: &mut Criterion) {
    c.bench_function("extractor_creation", |b| {
        b.iter(|| TextExtractor::new(ExtractOptions::default()).unwrap());
    });
}

/// Benchmark the visualization summary.
fn bench_visualize(c: &mut Criterion) {
    let data = pdfstruct::extract_text_data(&create_test_text(10)).unwrap();

    c.bench_function("visualize_10_sections", |b| {
        b.iter(|| pdfstruct::visualize(black_box(&data)));
    });
}

/// Benchmark parallel extraction of independent texts.
fn bench_batch(c: &mut Criterion) {
    let texts: Vec<String> = (0..16).map(|_| create_test_text(10)).collect();

    c.bench_function("extract_batch_16", |b| {
        b.iter(|| pdfstruct::extract_batch(black_box(&texts), &ExtractOptions::default()).unwrap());
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_extraction,
    bench_extractor_creation,
    bench_visualize,
    bench_batch,
);
criterion_main!(benches);
