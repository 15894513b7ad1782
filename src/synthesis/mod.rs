//! Transform pipeline from Gaussian samples to geometric objects and images
//!
//! Data flows Gaussian → uniform → segment/rectangle coordinates → raster
//! images. Every stage is a pure function that borrows its input and returns
//! a freshly allocated array.

/// Paired latent samples, rectangle coordinates and rendered images
pub mod dataset;
/// Coverage rasterization of rectangle coordinates
pub mod raster;
/// Rectangle coordinates from two independent segment transforms
pub mod rectangle;
/// Order-preserving segment endpoints with a minimum length
pub mod segment;
/// Uniform marginals through the standard normal CDF
pub mod uniform;

pub use dataset::RectangleDataset;
pub use raster::{Rectangle, rectangle_coords_to_images};
pub use rectangle::{RectangleBounds, normal_to_rectangle_coords, uniform_to_rectangle_coords};
pub use segment::{normal_to_segment, uniform_to_segment};
pub use uniform::normal_to_uniform;
