//! Criterion benchmarks for Sapling.
//!
//! Covers the hot paths of the text pipelines:
//! - Word tokenization and the frequency analyzer
//! - Part-of-speech tagging
//! - VADER polarity scoring
//! - Decision tree fitting

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sapling::analysis::{Analyzer, FrequencyAnalyzer, FrequencyDistribution, WordTokenizer};
use sapling::ml::{Classifier, DecisionTreeClassifier};
use sapling::sentiment::SentimentIntensityAnalyzer;
use sapling::tagging::pos_tag;

/// Generate test sentences for benchmarking.
fn generate_test_sentences(count: usize) -> Vec<String> {
    let words = [
        "the", "movie", "was", "great", "but", "the", "plot", "felt", "very", "boring",
        "and", "not", "funny", "at", "all", "acting", "wonderful", "story", "awful",
        "really", "good", "ending", "Hawaii", "Obama", "industries", "learning",
    ];

    (0..count)
        .map(|i| {
            let length = 8 + (i % 20);
            let mut sentence: Vec<&str> = (0..length)
                .map(|j| words[(i * 7 + j * 13) % words.len()])
                .collect();
            sentence.push(if i % 3 == 0 { "!" } else { "." });
            sentence.join(" ")
        })
        .collect()
}

/// Benchmark tokenization and frequency counting.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");
    let texts = generate_test_sentences(100);
    let tokenizer = WordTokenizer::new();
    let analyzer = FrequencyAnalyzer::new();

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("word_tokenize", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(tokenizer.words(black_box(text)));
            }
        })
    });

    let paragraph = texts.join(" ");
    group.bench_function("frequency_distribution", |b| {
        b.iter(|| {
            let freq: FrequencyDistribution = analyzer
                .analyze(black_box(&paragraph))
                .unwrap()
                .map(|token| token.text)
                .collect();
            black_box(freq.most_common(20))
        })
    });

    group.bench_function("pos_tag", |b| {
        b.iter(|| {
            for text in texts.iter().take(20) {
                black_box(pos_tag(black_box(text)).unwrap());
            }
        })
    });

    group.finish();
}

/// Benchmark VADER scoring.
fn bench_vader(c: &mut Criterion) {
    let mut group = c.benchmark_group("vader");
    let texts = generate_test_sentences(100);
    let analyzer = SentimentIntensityAnalyzer::new();

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("polarity_scores", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(analyzer.polarity_scores(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark decision tree fitting on a synthetic categorical dataset.
fn bench_decision_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("decision_tree");
    let x: Vec<Vec<f64>> = (0..500)
        .map(|i| vec![(i % 5) as f64, (i % 7) as f64, (i % 3) as f64])
        .collect();
    let y: Vec<usize> = x
        .iter()
        .map(|row| usize::from(row[0] + row[2] > 3.0))
        .collect();

    group.bench_function("fit_500x3", |b| {
        b.iter(|| {
            let mut tree = DecisionTreeClassifier::new();
            tree.fit(black_box(&x), black_box(&y)).unwrap();
            black_box(tree)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_vader, bench_decision_tree);
criterion_main!(benches);
