use criterion::{criterion_group, criterion_main, Criterion};

use faqmine_core::config::SubclusterConfig;
use faqmine_core::traits::IEmbeddingProvider;
use faqmine_subcluster::pipeline::{phase1_reduction, phase2_partition};
use faqmine_subcluster::run_group;
use test_fixtures::{Blob, SyntheticCorpus};

/// One parent group of 300 records in three blobs, 384-dimensional.
fn corpus() -> (SyntheticCorpus, Vec<Vec<f32>>) {
    let mut corpus = SyntheticCorpus::new(384, 42);
    corpus.add_group(
        "bench",
        &[Blob::new(120, 0), Blob::new(100, 1), Blob::new(80, 2)],
        0.05,
    );
    let vectors = corpus
        .embedder()
        .embed_batch(&corpus.groups()[0].summaries())
        .unwrap();
    (corpus, vectors)
}

fn bench_reduction(c: &mut Criterion) {
    let (_, vectors) = corpus();
    let config = SubclusterConfig::default();

    c.bench_function("reduce_300x384_to_10", |b| {
        b.iter(|| phase1_reduction::reduce_group(&vectors, &config).unwrap());
    });
}

fn bench_select_k(c: &mut Criterion) {
    let (_, vectors) = corpus();
    let config = SubclusterConfig::default();
    let reduced = phase1_reduction::reduce_group(&vectors, &config).unwrap();

    c.bench_function("select_k_300_points_n_init_50", |b| {
        b.iter(|| phase2_partition::select_k(&reduced, &config).unwrap());
    });
}

fn bench_run_group(c: &mut Criterion) {
    let (corpus, vectors) = corpus();
    let config = SubclusterConfig::default();

    c.bench_function("run_group_300_records", |b| {
        b.iter(|| run_group(&corpus.groups()[0], &vectors, &config).unwrap());
    });
}

criterion_group!(benches, bench_reduction, bench_select_k, bench_run_group);
criterion_main!(benches);
