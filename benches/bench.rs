//! Criterion benchmarks for text-analyzer.
//!
//! Covers the four analysis operations and the shared pipeline:
//! - Tokenization (sentences, words, LLM tokens)
//! - POS tagging and NER
//! - Stemming and lemmatization

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use text_analyzer::analysis::pipeline::Pipeline;
use text_analyzer::normalizers::{lem_text, stem_text};
use text_analyzer::taggers::{ner_bio_tagging, pos_tagging};
use text_analyzer::tokenizers::tokenize_text;

/// Generate test sentences for benchmarking.
fn generate_test_texts(count: usize) -> Vec<String> {
    let sentences = [
        "Elon Musk founded SpaceX in California in 2002.",
        "The quick brown fox jumps over the lazy dog.",
        "Apple paid $3 billion for the company last year.",
        "Naruto trained hard every morning before the Chunin Exams.",
        "She was running faster than the other runners.",
        "Dr. Jane Roe moved to New York City on May 5, 2024.",
        "Tokenization splits text into smaller units.",
        "They didn't believe the studies were finished.",
    ];

    (0..count)
        .map(|i| {
            let length = 1 + i % 4; // Variable length texts
            (0..length)
                .map(|j| sentences[(i * 3 + j * 5) % sentences.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Benchmark tokenization.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");
    let texts = generate_test_texts(100);

    group.bench_function("tokenize_single_text", |b| {
        b.iter(|| black_box(tokenize_text(black_box(&texts[0]))))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("tokenize_batch", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(tokenize_text(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark POS tagging and entity recognition.
fn bench_tagging(c: &mut Criterion) {
    let mut group = c.benchmark_group("tagging");
    let texts = generate_test_texts(100);

    group.bench_function("pos_tagging", |b| {
        b.iter(|| black_box(pos_tagging(black_box(&texts[3]))))
    });

    group.bench_function("ner_bio_tagging", |b| {
        b.iter(|| black_box(ner_bio_tagging(black_box(&texts[3]))))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("pipeline_batch", |b| {
        let pipeline = Pipeline::shared();
        b.iter(|| {
            for text in &texts {
                let _ = black_box(pipeline.process(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark stemming and lemmatization.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");
    let texts = generate_test_texts(100);

    group.bench_function("stem_text", |b| {
        b.iter(|| black_box(stem_text(black_box(&texts[3]))))
    });

    group.bench_function("lem_text", |b| {
        b.iter(|| black_box(lem_text(black_box(&texts[3]))))
    });

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_tagging, bench_normalization);

criterion_main!(benches);
