//! Grayscale PNG export of coverage images

use crate::io::error::{Result, SynthesisError, invalid_parameter};
use image::{GrayImage, Luma};
use ndarray::{ArrayView2, ArrayView3, Axis};
use std::path::Path;

/// Gray level drawn between tiles of the preview sheet
const SEPARATOR_LEVEL: u8 = 96;

/// Convert coverage in `[0, 1]` to an 8-bit gray level
///
/// Values outside the range saturate; NaN maps to black.
pub fn coverage_to_intensity(coverage: f64) -> u8 {
    if coverage.is_nan() {
        return 0;
    }
    (coverage.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn pixel_dimension(parameter: &'static str, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|e| invalid_parameter(parameter, &value, &e))
}

// Image axis 0 runs along PNG columns, axis 1 along PNG rows
fn draw_coverage(canvas: &mut GrayImage, image: &ArrayView2<'_, f64>, origin: (u32, u32)) {
    for ((x, y), &coverage) in image.indexed_iter() {
        canvas.put_pixel(
            origin.0 + x as u32,
            origin.1 + y as u32,
            Luma([coverage_to_intensity(coverage)]),
        );
    }
}

fn save(canvas: &GrayImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SynthesisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas.save(path).map_err(|e| SynthesisError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Export one `(img_width, img_height)` coverage image as a grayscale PNG
///
/// # Errors
///
/// Returns an error if the image is too large for PNG dimensions, the parent
/// directory cannot be created, or the file cannot be written
pub fn export_sample_png(image: &ArrayView2<'_, f64>, path: &Path) -> Result<()> {
    let (width, height) = image.dim();
    let mut canvas = GrayImage::new(
        pixel_dimension("img_width", width)?,
        pixel_dimension("img_height", height)?,
    );
    draw_coverage(&mut canvas, image, (0, 0));
    save(&canvas, path)
}

/// Tile up to `max_samples` images into a single PNG, `columns` per row
///
/// Tiles are separated by one-pixel gray lines.
///
/// # Errors
///
/// Returns an error if `columns` is zero, there are no images, or the sheet
/// cannot be written
pub fn export_preview_sheet(
    images: &ArrayView3<'_, f64>,
    columns: usize,
    max_samples: usize,
    path: &Path,
) -> Result<()> {
    if columns == 0 {
        return Err(invalid_parameter("columns", &columns, &"must be positive"));
    }
    let count = images.len_of(Axis(0)).min(max_samples);
    if count == 0 {
        return Err(invalid_parameter(
            "images",
            &count,
            &"preview needs at least one image",
        ));
    }

    let (_, width, height) = images.dim();
    let tile_columns = columns.min(count);
    let tile_rows = count.div_ceil(tile_columns);
    let sheet_width = pixel_dimension("sheet_width", tile_columns * (width + 1) + 1)?;
    let sheet_height = pixel_dimension("sheet_height", tile_rows * (height + 1) + 1)?;

    let mut canvas = GrayImage::from_pixel(sheet_width, sheet_height, Luma([SEPARATOR_LEVEL]));
    for (index, image) in images.outer_iter().take(count).enumerate() {
        let origin = (
            ((index % tile_columns) * (width + 1) + 1) as u32,
            ((index / tile_columns) * (height + 1) + 1) as u32,
        );
        draw_coverage(&mut canvas, &image, origin);
    }

    save(&canvas, path)
}
