//! Paired latent samples, rectangle coordinates and rendered images

use crate::io::error::{Result, invalid_parameter};
use crate::sampling::GaussianSource;
use crate::synthesis::raster::rectangle_coords_to_images;
use crate::synthesis::rectangle::{RECTANGLE_COLUMNS, RectangleBounds, normal_to_rectangle_coords};
use ndarray::{Array2, Array3};

/// A batch of `X` samples paired with rectangle images derived from `Y`
///
/// `I(X; images)` equals `I(X; Y)` of the source because every transform
/// from `Y` to the images is injective on the support.
#[derive(Debug, Clone)]
pub struct RectangleDataset {
    /// Latent samples kept as the estimator's first variable, `(N, dim)`
    pub x: Array2<f64>,
    /// Gaussian samples the rectangles were generated from, `(N, 4)`
    pub y: Array2<f64>,
    /// Rectangle coordinates `(x_left, x_right, y_top, y_bottom)`, `(N, 4)`
    pub coords: Array2<f64>,
    /// Coverage images, `(N, img_width, img_height)`
    pub images: Array3<f64>,
    /// Mutual information `I(X; Y)` in nats reported by the source
    pub mutual_information: f64,
}

impl RectangleDataset {
    /// Draw `n_samples` pairs from `source` and render `Y` as rectangles
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not four-dimensional, the bounds are
    /// invalid, or the largest rectangle would not fit in the image
    pub fn generate<G>(
        source: &mut G,
        n_samples: usize,
        bounds: &RectangleBounds,
        img_width: usize,
        img_height: usize,
    ) -> Result<Self>
    where
        G: GaussianSource + ?Sized,
    {
        if source.dim() != RECTANGLE_COLUMNS {
            return Err(invalid_parameter(
                "dim",
                &source.dim(),
                &format!("rectangle generation needs a {RECTANGLE_COLUMNS}-dimensional source"),
            ));
        }
        bounds.validate()?;
        if bounds.max_width > img_width as f64 {
            return Err(invalid_parameter(
                "max_width",
                &bounds.max_width,
                &format!("must not exceed img_width = {img_width}"),
            ));
        }
        if bounds.max_height > img_height as f64 {
            return Err(invalid_parameter(
                "max_height",
                &bounds.max_height,
                &format!("must not exceed img_height = {img_height}"),
            ));
        }

        let (x, y) = source.sample(n_samples)?;
        let coords = normal_to_rectangle_coords(&y, bounds)?;
        let images = rectangle_coords_to_images(&coords, img_width, img_height)?;

        tracing::info!(
            n_samples,
            img_width,
            img_height,
            mutual_information = source.mutual_information(),
            "generated rectangle dataset"
        );

        Ok(Self {
            x,
            y,
            coords,
            images,
            mutual_information: source.mutual_information(),
        })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.images.len_of(ndarray::Axis(0))
    }

    /// Whether the dataset holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
