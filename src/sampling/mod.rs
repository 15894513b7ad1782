//! Gaussian sources feeding the synthesis pipeline

/// Correlated standard-normal pairs with prescribed mutual information
pub mod gaussian;

pub use gaussian::{CorrelatedNormal, GaussianSource};
