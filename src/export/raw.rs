//! RAW format export for game engine compatibility.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use super::HeightGrid;

/// Errors that can occur during RAW export.
#[derive(Error, Debug)]
pub enum RawExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid height range: min ({0}) >= max ({1})")]
    InvalidHeightRange(f32, f32),
}

/// RAW export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawFormat {
    /// 16-bit unsigned integer, little-endian (Unity default).
    #[default]
    R16LittleEndian,
    /// 32-bit float, little-endian (high precision, no normalization).
    R32Float,
}

/// Exports a height grid as a headerless RAW heightmap.
///
/// R16 output is normalized from the grid's own height range to the full
/// 16-bit range; R32 output writes the raw signed heights untouched.
///
/// # Arguments
/// * `grid` - The sampled height grid
/// * `path` - Output file path
/// * `format` - RAW sample format
pub fn export_height_raw(
    grid: &HeightGrid,
    path: &Path,
    format: RawFormat,
) -> Result<(), RawExportError> {
    let (min, max) = grid.range();
    if format == RawFormat::R16LittleEndian && min >= max {
        return Err(RawExportError::InvalidHeightRange(min, max));
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match format {
        RawFormat::R16LittleEndian => {
            let inv_span = 1.0 / (max - min);
            for &h in &grid.samples {
                let v = (((h - min) * inv_span).clamp(0.0, 1.0) * u16::MAX as f32) as u16;
                writer.write_all(&v.to_le_bytes())?;
            }
        }
        RawFormat::R32Float => {
            for &h in &grid.samples {
                writer.write_all(&h.to_le_bytes())?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
