//! Numeric building blocks: vector math, PCA, k-means, silhouette.

pub mod kmeans;
pub mod pca;
pub mod silhouette;
pub mod vector;
