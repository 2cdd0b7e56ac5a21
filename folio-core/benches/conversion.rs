//! Conversion benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use folio_core::segment::Segmenter;
use folio_core::{BookMetadata, Converter, Language};
use std::hint::black_box;

fn labelled_manuscript(chapters: usize) -> String {
    let mut text = String::new();
    for n in 1..=chapters {
        text.push_str(&format!("Chapter {}\n\n", n));
        for p in 0..20 {
            text.push_str(&format!(
                "Paragraph {} of chapter {} runs on for a while so that the renderer has real prose to classify.\n\n",
                p, n
            ));
        }
    }
    text
}

fn unlabelled_manuscript(paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|p| format!("plain paragraph {} with no heading anywhere near it at all.", p))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn conversion_benchmark(c: &mut Criterion) {
    let metadata = BookMetadata::new("Benchmark", Language::English).unwrap();
    let converter = Converter::new();

    let mut group = c.benchmark_group("convert");
    for chapters in [5, 50] {
        let text = labelled_manuscript(chapters);
        group.bench_with_input(BenchmarkId::from_parameter(chapters), &text, |b, text| {
            b.iter(|| converter.convert(black_box(text), &metadata).unwrap())
        });
    }
    group.finish();

    let segmenter = Segmenter::new();
    let labelled = labelled_manuscript(50);
    let unlabelled = unlabelled_manuscript(1000);
    c.bench_function("segment/labelled", |b| {
        b.iter(|| segmenter.segment(black_box(&labelled)))
    });
    c.bench_function("segment/fallback", |b| {
        b.iter(|| segmenter.segment(black_box(&unlabelled)))
    });
}

criterion_group!(benches, conversion_benchmark);
criterion_main!(benches);
