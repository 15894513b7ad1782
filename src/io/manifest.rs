//! JSON manifest pairing latent samples with exported images

use crate::io::error::{Result, SynthesisError};
use crate::synthesis::{RectangleBounds, RectangleDataset};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One exported sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Image file name relative to the manifest
    pub image: String,
    /// Latent `X` row
    pub x: Vec<f64>,
    /// Rectangle `(x_left, x_right, y_top, y_bottom)` in pixels
    pub rectangle: Vec<f64>,
}

/// Generation settings and per-sample records of an exported dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetManifest {
    /// Seed of the Gaussian source
    pub seed: u64,
    /// Mutual information `I(X; image)` in nats
    pub mutual_information: f64,
    /// Image width in pixels
    pub img_width: usize,
    /// Image height in pixels
    pub img_height: usize,
    /// Rectangle size limits `[min_width, max_width, min_height, max_height]`
    pub bounds: [f64; 4],
    /// Exported samples in generation order
    pub samples: Vec<SampleRecord>,
}

impl DatasetManifest {
    /// Describe `dataset`, naming sample `i` with `image_name(i)`
    pub fn from_dataset(
        dataset: &RectangleDataset,
        seed: u64,
        bounds: &RectangleBounds,
        image_name: impl Fn(usize) -> String,
    ) -> Self {
        let (_, img_width, img_height) = dataset.images.dim();
        let samples = dataset
            .x
            .outer_iter()
            .zip(dataset.coords.outer_iter())
            .enumerate()
            .map(|(index, (x, rectangle))| SampleRecord {
                image: image_name(index),
                x: x.to_vec(),
                rectangle: rectangle.to_vec(),
            })
            .collect();

        Self {
            seed,
            mutual_information: dataset.mutual_information,
            img_width,
            img_height,
            bounds: [
                bounds.min_width,
                bounds.max_width,
                bounds.min_height,
                bounds.max_height,
            ],
            samples,
        }
    }

    /// Write the manifest as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or serialization fails
    pub fn write(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| SynthesisError::FileSystem {
            path: path.to_path_buf(),
            operation: "create manifest",
            source: e,
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| {
            SynthesisError::Serialization {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        writer.flush().map_err(|e| SynthesisError::FileSystem {
            path: path.to_path_buf(),
            operation: "write manifest",
            source: e,
        })
    }
}
