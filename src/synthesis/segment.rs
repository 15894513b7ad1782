//! Order-preserving segment endpoints with a minimum length
//!
//! A pair of independent uniforms `(u0, u1)` is mapped to `(left, right)`
//! distributed uniformly over the triangle
//! `{0 <= left, left + min_length <= right <= 1}`. Under that law `left` has
//! density proportional to `1 - min_length - left`, whose inverse CDF gives
//! `left = (1 - min_length)(1 - sqrt(1 - u0))`. Given `left`, `right` is uniform
//! on `[left + min_length, 1]`.

use crate::io::error::{Result, ensure_columns, invalid_parameter};
use crate::synthesis::uniform::normal_to_uniform;
use ndarray::{Array2, ArrayBase, Data, Ix2, Zip, s};

/// Columns consumed and produced by the segment transform
pub const SEGMENT_COLUMNS: usize = 2;

/// Check that `min_length` lies in `[0, 1)`
///
/// # Errors
///
/// Returns an error for values outside `[0, 1)`, including NaN
pub fn validate_min_length(min_length: f64) -> Result<()> {
    if (0.0..1.0).contains(&min_length) {
        Ok(())
    } else {
        Err(invalid_parameter(
            "min_length",
            &min_length,
            &"must lie in [0, 1)",
        ))
    }
}

/// Endpoints for a single pair of uniform values
pub fn segment_endpoints(u0: f64, u1: f64, min_length: f64) -> (f64, f64) {
    let left = (1.0 - min_length) * (1.0 - (1.0 - u0).sqrt());
    let right = u1.mul_add(1.0 - left - min_length, left + min_length);
    (left, right)
}

/// Map uniform `(N, 2)` samples to segment endpoints `(left, right)`
///
/// Every output row satisfies `0 <= left`, `right <= 1` and
/// `right - left >= min_length`.
///
/// # Errors
///
/// Returns an error if the input does not have exactly two columns or
/// `min_length` is outside `[0, 1)`
pub fn uniform_to_segment<S>(uniform: &ArrayBase<S, Ix2>, min_length: f64) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    ensure_columns("uniform_to_segment", uniform.ncols(), SEGMENT_COLUMNS)?;
    validate_min_length(min_length)?;

    let mut segments = Array2::zeros((uniform.nrows(), SEGMENT_COLUMNS));
    let (lefts, rights) = segments.multi_slice_mut((s![.., 0], s![.., 1]));

    Zip::from(lefts)
        .and(rights)
        .and(uniform.column(0))
        .and(uniform.column(1))
        .for_each(|left, right, &u0, &u1| {
            (*left, *right) = segment_endpoints(u0, u1, min_length);
        });

    Ok(segments)
}

/// Map unit-variance Gaussian `(N, 2)` samples to segment endpoints
///
/// Composition of [`normal_to_uniform`] and [`uniform_to_segment`].
///
/// # Errors
///
/// Same conditions as [`uniform_to_segment`]
pub fn normal_to_segment<S>(samples: &ArrayBase<S, Ix2>, min_length: f64) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    ensure_columns("normal_to_segment", samples.ncols(), SEGMENT_COLUMNS)?;
    validate_min_length(min_length)?;
    uniform_to_segment(&normal_to_uniform(samples), min_length)
}
