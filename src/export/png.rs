//! PNG export for sampled height grids.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use super::HeightGrid;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum PngExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid height range: min ({0}) >= max ({1})")]
    InvalidHeightRange(f32, f32),
    #[error("Invalid grid dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// Minimum height mapped to black. `None` auto-detects from the grid.
    pub min_height: Option<f32>,
    /// Maximum height mapped to white. `None` auto-detects from the grid.
    pub max_height: Option<f32>,
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            min_height: None,
            max_height: None,
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Exports a height grid as a 16-bit grayscale PNG.
///
/// Heights are normalized linearly from `[min_height, max_height]` to the
/// full 16-bit range and clamped outside it.
///
/// # Arguments
/// * `grid` - The sampled height grid
/// * `path` - Output file path
/// * `options` - Normalization range and PNG encoding options
pub fn export_height_png(
    grid: &HeightGrid,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    if grid.width < 2 || grid.height < 2 {
        return Err(PngExportError::InvalidDimensions(grid.width, grid.height));
    }

    let (auto_min, auto_max) = grid.range();
    let min = options.min_height.unwrap_or(auto_min);
    let max = options.max_height.unwrap_or(auto_max);
    if min >= max {
        return Err(PngExportError::InvalidHeightRange(min, max));
    }

    let inv_span = 1.0 / (max - min);
    let pixels: Vec<u16> = grid
        .samples
        .iter()
        .map(|&h| (((h - min) * inv_span).clamp(0.0, 1.0) * u16::MAX as f32) as u16)
        .collect();

    // image expects big-endian bytes for 16-bit samples.
    let mut bytes = Vec::with_capacity(pixels.len() * 2);
    for p in &pixels {
        bytes.extend_from_slice(&p.to_be_bytes());
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(&bytes, grid.width, grid.height, ExtendedColorType::L16)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::PlanetField;

    fn test_grid() -> HeightGrid {
        let field = PlanetField::new(42, 1.0, 1.0);
        HeightGrid::sample(&field, 32, 16)
    }

    #[test]
    fn test_export_writes_file() {
        let grid = test_grid();
        let dir = std::env::temp_dir();
        let path = dir.join("planetgen_test_height.png");
        export_height_png(&grid, &path, &PngExportOptions::default()).unwrap();
        assert!(path.exists());
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0, "PNG file should not be empty");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let grid = test_grid();
        let path = std::env::temp_dir().join("planetgen_test_invalid.png");
        let options = PngExportOptions {
            min_height: Some(1.0),
            max_height: Some(-1.0),
            ..Default::default()
        };
        let result = export_height_png(&grid, &path, &options);
        assert!(matches!(result, Err(PngExportError::InvalidHeightRange(_, _))));
    }

    #[test]
    fn test_tiny_grid_rejected() {
        let grid = HeightGrid {
            width: 1,
            height: 1,
            samples: vec![0.0],
        };
        let path = std::env::temp_dir().join("planetgen_test_tiny.png");
        let result = export_height_png(&grid, &path, &PngExportOptions::default());
        assert!(matches!(result, Err(PngExportError::InvalidDimensions(1, 1))));
    }
}
