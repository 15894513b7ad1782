//! Command-line interface for generating rectangle image datasets

use crate::io::configuration::{
    DEFAULT_IMAGE_SIZE, DEFAULT_MIN_RECTANGLE_SIZE, DEFAULT_MUTUAL_INFORMATION, DEFAULT_SAMPLES,
    DEFAULT_SEED, MANIFEST_FILE_NAME, PREVIEW_COLUMNS, PREVIEW_FILE_NAME, PREVIEW_SAMPLES,
    SAMPLE_FILE_PREFIX,
};
use crate::io::error::{Result, SynthesisError};
use crate::io::image::{export_preview_sheet, export_sample_png};
use crate::io::manifest::DatasetManifest;
use crate::io::progress::ProgressManager;
use crate::sampling::CorrelatedNormal;
use crate::synthesis::rectangle::RECTANGLE_COLUMNS;
use crate::synthesis::{RectangleBounds, RectangleDataset};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "mutinfo")]
#[command(
    author,
    version,
    about = "Generate rectangle images with a known mutual information to a Gaussian latent"
)]
/// Command-line arguments for dataset generation
pub struct Cli {
    /// Directory receiving the images and manifest
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: PathBuf,

    /// Number of samples to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Mutual information between the latent and the images, in nats
    #[arg(short, long, default_value_t = DEFAULT_MUTUAL_INFORMATION)]
    pub mutual_information: f64,

    /// Image width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_IMAGE_SIZE)]
    pub width: usize,

    /// Image height in pixels (defaults to the width)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Smallest rectangle width in pixels
    #[arg(long, default_value_t = DEFAULT_MIN_RECTANGLE_SIZE)]
    pub min_width: f64,

    /// Largest rectangle width in pixels (defaults to the image width)
    #[arg(long)]
    pub max_width: Option<f64>,

    /// Smallest rectangle height in pixels
    #[arg(long, default_value_t = DEFAULT_MIN_RECTANGLE_SIZE)]
    pub min_height: f64,

    /// Largest rectangle height in pixels (defaults to the image height)
    #[arg(long)]
    pub max_height: Option<f64>,

    /// Only write the preview sheet and manifest, not one PNG per sample
    #[arg(short, long)]
    pub preview_only: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Image height, falling back to the width for square images
    pub fn image_height(&self) -> usize {
        self.height.unwrap_or(self.width)
    }

    /// Rectangle size limits, with maxima defaulting to the image size
    pub fn bounds(&self) -> RectangleBounds {
        RectangleBounds::new(
            self.min_width,
            self.max_width.unwrap_or(self.width as f64),
            self.min_height,
            self.max_height.unwrap_or(self.image_height() as f64),
        )
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Generates a dataset and writes it to the output directory
pub struct DatasetExporter {
    cli: Cli,
    progress: ProgressManager,
}

impl DatasetExporter {
    /// Create an exporter for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self { cli, progress }
    }

    /// Generate the dataset and write images, preview sheet and manifest
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or any output cannot be
    /// written
    pub fn run(&self) -> Result<RectangleDataset> {
        let start_time = Instant::now();
        let bounds = self.cli.bounds();
        let (img_width, img_height) = (self.cli.width, self.cli.image_height());

        let mut source =
            CorrelatedNormal::new(RECTANGLE_COLUMNS, self.cli.mutual_information, self.cli.seed)?;
        let dataset = RectangleDataset::generate(
            &mut source,
            self.cli.samples,
            &bounds,
            img_width,
            img_height,
        )?;

        std::fs::create_dir_all(&self.cli.output).map_err(|e| SynthesisError::FileSystem {
            path: self.cli.output.clone(),
            operation: "create directory",
            source: e,
        })?;

        if !self.cli.preview_only {
            self.progress.start_stage("images", dataset.len());
            for (index, image) in dataset.images.outer_iter().enumerate() {
                export_sample_png(&image, &self.cli.output.join(Self::sample_file_name(index)))?;
                self.progress.advance();
            }
            self.progress.finish();
        }

        if !dataset.is_empty() {
            export_preview_sheet(
                &dataset.images.view(),
                PREVIEW_COLUMNS,
                PREVIEW_SAMPLES,
                &self.cli.output.join(PREVIEW_FILE_NAME),
            )?;
        }

        DatasetManifest::from_dataset(&dataset, self.cli.seed, &bounds, Self::sample_file_name)
            .write(&self.manifest_path())?;

        tracing::info!(
            samples = dataset.len(),
            output = %self.cli.output.display(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "dataset written"
        );

        Ok(dataset)
    }

    /// File name of the image for sample `index`
    pub fn sample_file_name(index: usize) -> String {
        format!("{SAMPLE_FILE_PREFIX}{index:06}.png")
    }

    fn manifest_path(&self) -> PathBuf {
        Path::new(&self.cli.output).join(MANIFEST_FILE_NAME)
    }
}
