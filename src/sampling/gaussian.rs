//! Paired standard-normal samples with a prescribed mutual information
//!
//! The pipeline only relies on the [`GaussianSource`] seam; [`CorrelatedNormal`]
//! is the source used by the CLI and the tests. It draws `X` and `Y` of equal
//! dimension where component `i` of `X` is correlated with component `i` of `Y`
//! and every other pair is independent, so the total mutual information is the
//! sum of the per-component terms `-ln(1 - rho^2) / 2`.

use crate::io::error::{Result, invalid_parameter};
use crate::math::probability::correlation_from_mutual_information;
use ndarray::{Array2, Zip};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

/// Produces paired Gaussian batches `(X, Y)` with unit variance per column
pub trait GaussianSource {
    /// Number of columns in each of `X` and `Y`
    fn dim(&self) -> usize;

    /// Total mutual information `I(X; Y)` in nats
    fn mutual_information(&self) -> f64;

    /// Draw `n_samples` rows of `X` and the matching rows of `Y`
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce the requested batch
    fn sample(&mut self, n_samples: usize) -> Result<(Array2<f64>, Array2<f64>)>;
}

/// Component-wise correlated standard normals with mutual information split
/// evenly across components
#[derive(Debug, Clone)]
pub struct CorrelatedNormal {
    dim: usize,
    mutual_information: f64,
    correlation: f64,
    rng: StdRng,
}

impl CorrelatedNormal {
    /// Create a seeded source of `dim`-dimensional pairs carrying
    /// `mutual_information` nats in total
    ///
    /// # Errors
    ///
    /// Returns an error if `dim` is zero or `mutual_information` is negative or
    /// not finite
    pub fn new(dim: usize, mutual_information: f64, seed: u64) -> Result<Self> {
        if dim == 0 {
            return Err(invalid_parameter("dim", &dim, &"must be positive"));
        }
        if !mutual_information.is_finite() || mutual_information < 0.0 {
            return Err(invalid_parameter(
                "mutual_information",
                &mutual_information,
                &"must be finite and non-negative",
            ));
        }

        let correlation = correlation_from_mutual_information(mutual_information / dim as f64);

        Ok(Self {
            dim,
            mutual_information,
            correlation,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Correlation coefficient shared by every `(X_i, Y_i)` pair
    pub const fn correlation(&self) -> f64 {
        self.correlation
    }
}

impl GaussianSource for CorrelatedNormal {
    fn dim(&self) -> usize {
        self.dim
    }

    fn mutual_information(&self) -> f64 {
        self.mutual_information
    }

    fn sample(&mut self, n_samples: usize) -> Result<(Array2<f64>, Array2<f64>)> {
        let shape = (n_samples, self.dim);
        let rho = self.correlation;
        let noise_scale = rho.mul_add(-rho, 1.0).sqrt();

        let x: Array2<f64> =
            Array2::from_shape_simple_fn(shape, || StandardNormal.sample(&mut self.rng));
        let noise: Array2<f64> =
            Array2::from_shape_simple_fn(shape, || StandardNormal.sample(&mut self.rng));

        // Y = rho * X + sqrt(1 - rho^2) * Z keeps unit variance
        let y = Zip::from(&x)
            .and(&noise)
            .map_collect(|&x_value, &z_value| rho.mul_add(x_value, noise_scale * z_value));

        tracing::debug!(
            n_samples,
            dim = self.dim,
            mutual_information = self.mutual_information,
            correlation = rho,
            "sampled correlated normal pairs"
        );

        Ok((x, y))
    }
}
