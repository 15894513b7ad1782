//! Uniform marginals through the standard normal CDF

use crate::math::probability::standard_normal_cdf;
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Map unit-variance Gaussian samples to Uniform(0, 1) elementwise
///
/// Strictly increasing per coordinate, so mutual information between any
/// groups of columns is unchanged. Works on arrays of any dimensionality.
pub fn normal_to_uniform<S, D>(samples: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    samples.mapv(standard_normal_cdf)
}
