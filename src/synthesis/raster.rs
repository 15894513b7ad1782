//! Coverage rasterization of rectangle coordinates
//!
//! Each pixel receives the exact area of its unit square covered by the
//! rectangle. Coverage is continuous in the rectangle coordinates, so small
//! perturbations of the latent Gaussian give small perturbations of the image.
//! The covered block of a sample is the outer product of the per-column
//! horizontal overlaps and the per-row vertical overlaps.

use crate::io::error::{Result, ensure_columns};
use crate::synthesis::rectangle::RECTANGLE_COLUMNS;
use ndarray::{Array1, Array3, ArrayBase, ArrayView1, ArrayViewMut2, Axis, Data, Ix2, Zip, s};
use std::ops::Range;

/// Axis-aligned rectangle in pixel units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Left edge along the image width axis
    pub x_left: f64,
    /// Right edge along the image width axis
    pub x_right: f64,
    /// Top edge along the image height axis
    pub y_top: f64,
    /// Bottom edge along the image height axis
    pub y_bottom: f64,
}

impl Rectangle {
    /// Create a rectangle from its edges
    pub const fn new(x_left: f64, x_right: f64, y_top: f64, y_bottom: f64) -> Self {
        Self {
            x_left,
            x_right,
            y_top,
            y_bottom,
        }
    }

    /// Read a rectangle from a `(x_left, x_right, y_top, y_bottom)` row
    pub fn from_row(row: ArrayView1<'_, f64>) -> Option<Self> {
        Some(Self::new(
            *row.get(0)?,
            *row.get(1)?,
            *row.get(2)?,
            *row.get(3)?,
        ))
    }

    /// Geometric area, zero for degenerate or inverted rectangles
    pub fn area(&self) -> f64 {
        (self.x_right - self.x_left).max(0.0) * (self.y_bottom - self.y_top).max(0.0)
    }

    /// Whether the rectangle lies inside a `width` by `height` image
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.x_left >= 0.0
            && self.y_top >= 0.0
            && self.x_right <= width as f64
            && self.y_bottom <= height as f64
    }

    fn has_nan(&self) -> bool {
        self.x_left.is_nan() || self.x_right.is_nan() || self.y_top.is_nan() || self.y_bottom.is_nan()
    }
}

/// Render `(N, 4)` rectangle coordinates into `(N, img_width, img_height)` images
///
/// Pixel `(x, y)` of a sample holds the overlap area between the unit square
/// `[x, x + 1) x [y, y + 1)` and the rectangle. Coverage outside the image is
/// dropped; samples with NaN coordinates are filled with NaN. Samples are
/// rendered in parallel.
///
/// # Errors
///
/// Returns an error if the input does not have exactly four columns
pub fn rectangle_coords_to_images<S>(
    coords: &ArrayBase<S, Ix2>,
    img_width: usize,
    img_height: usize,
) -> Result<Array3<f64>>
where
    S: Data<Elem = f64>,
{
    ensure_columns(
        "rectangle_coords_to_images",
        coords.ncols(),
        RECTANGLE_COLUMNS,
    )?;

    let n_samples = coords.nrows();
    tracing::debug!(n_samples, img_width, img_height, "rasterizing rectangles");

    let truncated = coords
        .outer_iter()
        .filter_map(Rectangle::from_row)
        .filter(|rect| !rect.has_nan() && !rect.fits_within(img_width, img_height))
        .count();
    if truncated > 0 {
        tracing::warn!(
            truncated,
            n_samples,
            img_width,
            img_height,
            "rectangles exceed the image and will be clipped at its border"
        );
    }

    let mut images = Array3::zeros((n_samples, img_width, img_height));
    Zip::from(images.outer_iter_mut())
        .and(coords.outer_iter())
        .par_for_each(|image, row| {
            if let Some(rect) = Rectangle::from_row(row) {
                rasterize_rectangle(image, &rect);
            }
        });

    Ok(images)
}

/// Write the coverage of `rect` into a zero-initialised `(width, height)` image
pub fn rasterize_rectangle(mut image: ArrayViewMut2<'_, f64>, rect: &Rectangle) {
    if rect.has_nan() {
        image.fill(f64::NAN);
        return;
    }

    let (width, height) = image.dim();
    let (Some(columns), Some(rows)) = (
        pixel_span(rect.x_left, rect.x_right, width),
        pixel_span(rect.y_top, rect.y_bottom, height),
    ) else {
        return;
    };

    let dx: Array1<f64> = columns
        .clone()
        .map(|x| pixel_overlap(rect.x_left, rect.x_right, x))
        .collect();
    let dy: Array1<f64> = rows
        .clone()
        .map(|y| pixel_overlap(rect.y_top, rect.y_bottom, y))
        .collect();

    let mut block = image.slice_mut(s![columns, rows]);
    Zip::from(&mut block)
        .and_broadcast(&dx.insert_axis(Axis(1)))
        .and_broadcast(&dy.insert_axis(Axis(0)))
        .for_each(|pixel, &overlap_x, &overlap_y| *pixel = overlap_x * overlap_y);
}

/// Pixel indices touched by `[low, high]` along an axis of `extent` pixels
///
/// Includes the pixel containing `high` and is clipped to the image.
fn pixel_span(low: f64, high: f64, extent: usize) -> Option<Range<usize>> {
    let first = low.floor().max(0.0);
    let last = high.floor().min(extent as f64 - 1.0);
    (extent > 0 && first <= last).then(|| first as usize..last as usize + 1)
}

/// Length of `[low, high]` intersected with the unit pixel starting at `pixel`
fn pixel_overlap(low: f64, high: f64, pixel: usize) -> f64 {
    let start = pixel as f64;
    (high.min(start + 1.0) - low.max(start)).max(0.0)
}
