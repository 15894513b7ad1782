//! Input/output operations, configuration and error handling

/// Command-line interface and dataset export orchestration
pub mod cli;
/// Default parameters and output settings
pub mod configuration;
/// Error types for pipeline and file operations
pub mod error;
/// Grayscale PNG export of coverage images
pub mod image;
/// Structured logging setup
pub mod logging;
/// JSON manifest of exported datasets
pub mod manifest;
/// Progress display for long-running stages
pub mod progress;
