//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for batch transforms.

mod rayon_batch;

pub use rayon_batch::ParallelRayonBatch;
