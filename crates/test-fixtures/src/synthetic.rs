//! Synthetic parent groups whose embeddings form known blobs.

use std::collections::HashMap;

use faqmine_core::models::{ParentGroup, TicketRecord};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::embedders::LookupEmbedder;

/// A blob of `count` records around the unit axis `axis`.
#[derive(Debug, Clone, Copy)]
pub struct Blob {
    pub count: usize,
    pub axis: usize,
}

impl Blob {
    pub fn new(count: usize, axis: usize) -> Self {
        Self { count, axis }
    }
}

/// Builds parent groups and the embedder that knows their vectors.
///
/// Summaries are `"{parent}-b{blob}-{i}"`, so every text is unique and maps
/// to exactly one vector. Even-indexed records carry a resolution.
pub struct SyntheticCorpus {
    dims: usize,
    rng: ChaCha8Rng,
    groups: Vec<ParentGroup>,
    vectors: HashMap<String, Vec<f32>>,
}

impl SyntheticCorpus {
    pub fn new(dims: usize, seed: u64) -> Self {
        Self {
            dims,
            rng: ChaCha8Rng::seed_from_u64(seed),
            groups: Vec::new(),
            vectors: HashMap::new(),
        }
    }

    /// Add a parent group made of `blobs`, each point jittered uniformly by
    /// up to `noise` per dimension and re-normalized to unit length.
    /// `noise == 0.0` gives identical vectors within a blob.
    pub fn add_group(&mut self, parent_id: &str, blobs: &[Blob], noise: f32) -> &mut Self {
        let mut records = Vec::new();
        for (b, blob) in blobs.iter().enumerate() {
            for i in 0..blob.count {
                let summary = format!("{parent_id}-b{b}-{i}");
                let mut v = vec![0.0f32; self.dims];
                v[blob.axis % self.dims] = 1.0;
                if noise > 0.0 {
                    for x in &mut v {
                        *x += self.rng.random_range(-noise..noise);
                    }
                }
                let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
                v.iter_mut().for_each(|x| *x /= norm);

                let resolution = (i % 2 == 0).then(|| format!("resolution for {summary}"));
                self.vectors.insert(summary.clone(), v);
                records.push(TicketRecord::new(summary.clone(), summary, resolution));
            }
        }
        self.groups.push(ParentGroup::new(parent_id, records));
        self
    }

    pub fn groups(&self) -> &[ParentGroup] {
        &self.groups
    }

    pub fn embedder(&self) -> LookupEmbedder {
        LookupEmbedder::new(self.vectors.clone(), self.dims)
    }
}
