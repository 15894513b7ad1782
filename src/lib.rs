//! Synthetic geometric data with an analytically known mutual information
//!
//! Gaussian vectors with a prescribed mutual information are pushed through a
//! chain of monotone, order-preserving transforms into segments, rectangles and
//! anti-aliased rectangle images, so estimators can be checked against a known
//! answer on high-dimensional data.

#![deny(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Special functions and Gaussian mutual-information identities
pub mod math;
/// Gaussian sources with a controllable mutual-information structure
pub mod sampling;
/// Transform pipeline from Gaussian samples to geometric objects and images
pub mod synthesis;

pub use io::error::{Result, SynthesisError};
