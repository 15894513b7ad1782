//! Default generation parameters and output settings

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of generated samples
pub const DEFAULT_SAMPLES: usize = 1000;

/// Default mutual information between `X` and the rectangles, in nats
pub const DEFAULT_MUTUAL_INFORMATION: f64 = 1.0;

// Images are square unless a side is given explicitly
/// Default image side length in pixels
pub const DEFAULT_IMAGE_SIZE: usize = 32;

/// Default smallest rectangle side in pixels
pub const DEFAULT_MIN_RECTANGLE_SIZE: f64 = 4.0;

/// Number of tiles per row on the preview sheet
pub const PREVIEW_COLUMNS: usize = 16;
/// Number of samples shown on the preview sheet
pub const PREVIEW_SAMPLES: usize = 128;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Prefix of per-sample image files
pub const SAMPLE_FILE_PREFIX: &str = "sample_";
/// File name of the tiled preview image
pub const PREVIEW_FILE_NAME: &str = "preview.png";
/// File name of the JSON manifest with latent samples and coordinates
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Environment variable selecting `human` or `json` log output
pub const LOG_FORMAT_ENV: &str = "MUTINFO_LOG_FORMAT";
