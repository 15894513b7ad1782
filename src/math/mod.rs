//! Mathematical utilities for the synthesis pipeline

/// Normal distribution functions and mutual-information identities
pub mod probability;
