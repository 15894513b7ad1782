//! Rectangle coordinates from two independent segment transforms
//!
//! Columns `(0, 1)` become the horizontal extent `(x_left, x_right)` and
//! columns `(2, 3)` the vertical extent `(y_top, y_bottom)`. The axes never
//! share inputs, so no dependence is introduced between them.

use crate::io::error::{Result, ensure_columns, invalid_parameter};
use crate::synthesis::segment::uniform_to_segment;
use crate::synthesis::uniform::normal_to_uniform;
use ndarray::{Array2, ArrayBase, Data, Ix2, s};

/// Columns of a rectangle coordinate array: `x_left, x_right, y_top, y_bottom`
pub const RECTANGLE_COLUMNS: usize = 4;

/// Size constraints for generated rectangles, in pixel units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleBounds {
    /// Smallest allowed width
    pub min_width: f64,
    /// Largest allowed width, also the right edge of the horizontal range
    pub max_width: f64,
    /// Smallest allowed height
    pub min_height: f64,
    /// Largest allowed height, also the bottom edge of the vertical range
    pub max_height: f64,
}

impl Default for RectangleBounds {
    fn default() -> Self {
        Self {
            min_width: 0.0,
            max_width: 1.0,
            min_height: 0.0,
            max_height: 1.0,
        }
    }
}

impl RectangleBounds {
    /// Create bounds from explicit limits
    pub const fn new(min_width: f64, max_width: f64, min_height: f64, max_height: f64) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Check every limit before any sample is transformed
    ///
    /// # Errors
    ///
    /// Returns an error if a maximum is not positive, a minimum is negative,
    /// any limit is not finite, or a minimum is not strictly below its maximum
    pub fn validate(&self) -> Result<()> {
        validate_axis(
            ("min_width", self.min_width),
            ("max_width", self.max_width),
        )?;
        validate_axis(
            ("min_height", self.min_height),
            ("max_height", self.max_height),
        )
    }

    /// Minimum segment length of the horizontal axis on the unit interval
    pub fn width_ratio(&self) -> f64 {
        self.min_width / self.max_width
    }

    /// Minimum segment length of the vertical axis on the unit interval
    pub fn height_ratio(&self) -> f64 {
        self.min_height / self.max_height
    }
}

fn validate_axis(min: (&'static str, f64), max: (&'static str, f64)) -> Result<()> {
    let (min_name, min_value) = min;
    let (max_name, max_value) = max;

    if !max_value.is_finite() || max_value <= 0.0 {
        return Err(invalid_parameter(
            max_name,
            &max_value,
            &"must be finite and positive",
        ));
    }
    if !min_value.is_finite() || min_value < 0.0 {
        return Err(invalid_parameter(
            min_name,
            &min_value,
            &"must be finite and non-negative",
        ));
    }
    if min_value >= max_value {
        return Err(invalid_parameter(
            min_name,
            &min_value,
            &format!("must be strictly below {max_name} = {max_value}"),
        ));
    }
    Ok(())
}

/// Map uniform `(N, 4)` samples to rectangle coordinates
///
/// Output columns are `(x_left, x_right, y_top, y_bottom)` with
/// `x_right - x_left >= min_width`, `x_right <= max_width` and the same for
/// the vertical axis.
///
/// # Errors
///
/// Returns an error if the input does not have exactly four columns or the
/// bounds are invalid
pub fn uniform_to_rectangle_coords<S>(
    uniform: &ArrayBase<S, Ix2>,
    bounds: &RectangleBounds,
) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    ensure_columns(
        "uniform_to_rectangle_coords",
        uniform.ncols(),
        RECTANGLE_COLUMNS,
    )?;
    bounds.validate()?;

    let horizontal = uniform_to_segment(&uniform.slice(s![.., 0..2]), bounds.width_ratio())?;
    let vertical = uniform_to_segment(&uniform.slice(s![.., 2..4]), bounds.height_ratio())?;

    let mut coords = Array2::zeros((uniform.nrows(), RECTANGLE_COLUMNS));
    coords
        .slice_mut(s![.., 0..2])
        .assign(&(horizontal * bounds.max_width));
    coords
        .slice_mut(s![.., 2..4])
        .assign(&(vertical * bounds.max_height));

    Ok(coords)
}

/// Map unit-variance Gaussian `(N, 4)` samples to rectangle coordinates
///
/// Composition of [`normal_to_uniform`] and [`uniform_to_rectangle_coords`].
///
/// # Errors
///
/// Same conditions as [`uniform_to_rectangle_coords`]
pub fn normal_to_rectangle_coords<S>(
    samples: &ArrayBase<S, Ix2>,
    bounds: &RectangleBounds,
) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    ensure_columns(
        "normal_to_rectangle_coords",
        samples.ncols(),
        RECTANGLE_COLUMNS,
    )?;
    bounds.validate()?;
    uniform_to_rectangle_coords(&normal_to_uniform(samples), bounds)
}
