//! Error types for the synthesis pipeline and its file output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum SynthesisError {
    /// Input array does not have the column count a stage requires
    ShapeMismatch {
        /// Stage that rejected the input
        operation: &'static str,
        /// Number of columns the stage expects
        expected_columns: usize,
        /// Number of columns actually supplied
        actual_columns: usize,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize the dataset manifest
    Serialization {
        /// Path the manifest was destined for
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Structured logging could not be configured
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                operation,
                expected_columns,
                actual_columns,
            } => {
                write!(
                    f,
                    "Shape mismatch in {operation}: expected {expected_columns} columns, got {actual_columns}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to serialize manifest for '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { reason } => write!(f, "Logging setup failed: {reason}"),
        }
    }
}

impl std::error::Error for SynthesisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, SynthesisError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SynthesisError {
    SynthesisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject an array whose column count differs from what `operation` needs
///
/// # Errors
///
/// Returns [`SynthesisError::ShapeMismatch`] when `actual_columns != expected_columns`
pub const fn ensure_columns(
    operation: &'static str,
    actual_columns: usize,
    expected_columns: usize,
) -> Result<()> {
    if actual_columns == expected_columns {
        Ok(())
    } else {
        Err(SynthesisError::ShapeMismatch {
            operation,
            expected_columns,
            actual_columns,
        })
    }
}
