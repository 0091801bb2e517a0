//! Export of sampled height fields for external inspection.
//!
//! The core synthesizer produces heights per direction and owns no file
//! format; this module samples a [`PlanetField`] over an equirectangular
//! lat/lon grid and writes the result as a 16-bit PNG or a RAW heightmap.

mod png;
mod raw;

pub use png::{PngExportError, PngExportOptions, export_height_png};
pub use raw::{RawExportError, RawFormat, export_height_raw};

use glam::Vec3;
use rayon::prelude::*;

use crate::terrain::PlanetField;

/// An equirectangular grid of sampled heights, row-major, north pole first.
#[derive(Debug, Clone)]
pub struct HeightGrid {
    /// Grid width in samples (longitude).
    pub width: u32,
    /// Grid height in samples (latitude).
    pub height: u32,
    /// Sampled signed elevations, `width * height` values.
    pub samples: Vec<f32>,
}

impl HeightGrid {
    /// Samples the field over a `width x height` equirectangular grid.
    ///
    /// Rows are latitudes from +90° (top) to -90° (bottom), columns are
    /// longitudes from -180° to +180°; each pixel samples its center. Rows
    /// are evaluated in parallel.
    pub fn sample(field: &PlanetField, width: u32, height: u32) -> Self {
        let mut samples = vec![0.0f32; (width as usize) * (height as usize)];

        samples
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                let lat = (0.5 - (y as f32 + 0.5) / height as f32) * std::f32::consts::PI;
                for (x, sample) in row.iter_mut().enumerate() {
                    let lon = ((x as f32 + 0.5) / width as f32 - 0.5)
                        * std::f32::consts::PI
                        * 2.0;
                    *sample = field.height(lat_lon_to_dir(lat, lon));
                }
            });

        Self {
            width,
            height,
            samples,
        }
    }

    /// Minimum and maximum sampled height.
    pub fn range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for &h in &self.samples {
            min = min.min(h);
            max = max.max(h);
        }
        (min, max)
    }
}

#[inline]
fn lat_lon_to_dir(lat: f32, lon: f32) -> Vec3 {
    // lon=0 points toward +Z; +Y is the polar axis.
    let (slon, clon) = lon.sin_cos();
    let (slat, clat) = lat.sin_cos();
    Vec3::new(clat * slon, slat, clat * clon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        let field = PlanetField::new(42, 1.0, 1.0);
        let grid = HeightGrid::sample(&field, 64, 32);
        assert_eq!(grid.samples.len(), 64 * 32);
    }

    #[test]
    fn test_grid_deterministic() {
        let field = PlanetField::new(42, 1.0, 1.0);
        let a = HeightGrid::sample(&field, 32, 16);
        let b = HeightGrid::sample(&field, 32, 16);
        assert_eq!(a.samples, b.samples);
    }

    #[test]
    fn test_grid_matches_direct_queries() {
        let field = PlanetField::new(7, 1.0, 1.0);
        let grid = HeightGrid::sample(&field, 16, 8);

        // Spot-check one interior pixel against a direct field query.
        let (x, y) = (5u32, 3u32);
        let lat = (0.5 - (y as f32 + 0.5) / 8.0) * std::f32::consts::PI;
        let lon = ((x as f32 + 0.5) / 16.0 - 0.5) * std::f32::consts::PI * 2.0;
        let expected = field.height(lat_lon_to_dir(lat, lon));
        assert_eq!(grid.samples[(y * 16 + x) as usize], expected);
    }

    #[test]
    fn test_range_ordering() {
        let field = PlanetField::new(42, 1.0, 1.0);
        let grid = HeightGrid::sample(&field, 64, 32);
        let (min, max) = grid.range();
        assert!(min < max, "a planet surface should have height variation");
    }

    #[test]
    fn test_lat_lon_dirs_unit_length() {
        for lat_deg in [-89, -45, 0, 45, 89] {
            for lon_deg in [-179, -90, 0, 90, 179] {
                let dir = lat_lon_to_dir(
                    (lat_deg as f32).to_radians(),
                    (lon_deg as f32).to_radians(),
                );
                assert!((dir.length() - 1.0).abs() < 1e-5);
            }
        }
    }
}
