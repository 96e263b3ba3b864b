// Single source of truth for all default values.

// --- Source ---
pub const DEFAULT_TICKET_SOURCE: &str = "tdx";

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_MODEL: &str = "sentence-transformers/all-mpnet-base-v2";
pub const DEFAULT_EMBEDDING_DEVICE: &str = "gpu";
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 16;

// --- Subclustering ---
pub const DEFAULT_REDUCED_DIMENSIONS: usize = 10;
pub const DEFAULT_MIN_K: usize = 2;
pub const DEFAULT_MAX_K: usize = 4;
pub const DEFAULT_MIN_SUBCLUSTER_SIZE: usize = 5;
pub const DEFAULT_MAX_DOMINANCE: f64 = 0.85;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_N_INIT: usize = 50;
pub const DEFAULT_MAX_ITERATIONS: usize = 300;
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
pub const DEFAULT_PARALLEL_GROUPS: bool = false;

// --- Ranking ---
pub const DEFAULT_SIZE_WEIGHT: f64 = 0.4;
pub const DEFAULT_COHESION_WEIGHT: f64 = 1.2;
pub const DEFAULT_SEPARATION_WEIGHT: f64 = 0.2;
pub const DEFAULT_MIN_SIZE: f64 = 0.05; // too small = too specific
pub const DEFAULT_MAX_SIZE: f64 = 0.80; // too big = overly broad
pub const DEFAULT_EPSILON: f64 = 1e-3;
pub const DEFAULT_NUM_FAQS: usize = 20;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = false;
