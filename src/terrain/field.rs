//! Planet height field: composes the noise layers into surface elevation.

use glam::Vec3;
use rayon::prelude::*;

use crate::math::smoothstep;
use crate::noise::{PermutationTable, fbm, ridged_fbm};
use crate::params::NoiseParams;

/// Elevation subtracted from the combined layers; raising it drowns more of
/// the surface.
const SEA_LEVEL: f32 = 0.45;

/// A seeded, immutable generation context for one planet.
///
/// Construction derives the noise parameters and builds the permutation
/// table; afterward the field is read-only, so one `PlanetField` can be
/// shared freely across threads for parallel vertex displacement. Re-seeding
/// means constructing a new field, never mutating an old one — two fields
/// built with the same arguments answer every query identically.
#[derive(Debug, Clone)]
pub struct PlanetField {
    seed: u32,
    scale: f32,
    radius: f32,
    params: NoiseParams,
    perm: PermutationTable,
}

impl PlanetField {
    /// Creates the generation context for a seed.
    ///
    /// # Arguments
    /// * `seed` - Determines the permutation table and every derived parameter
    /// * `scale` - Multiplier applied to the final signed height
    /// * `radius` - Base sphere radius displaced heights offset from
    pub fn new(seed: u32, scale: f32, radius: f32) -> Self {
        Self {
            seed,
            scale,
            radius,
            params: NoiseParams::from_seed(seed),
            perm: PermutationTable::new(seed),
        }
    }

    /// The seed this field was built from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// The height multiplier.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// The base sphere radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The derived noise parameters.
    pub fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// Signed elevation along a direction.
    ///
    /// `dir` need not be normalized; a zero-length direction normalizes to
    /// the zero vector and yields the (defined, but degenerate) elevation at
    /// the lattice origin. Negative results are below sea level.
    pub fn height(&self, dir: Vec3) -> f32 {
        let n = dir.normalize_or_zero();
        let p = &self.params;

        // Continent shapes: low-frequency fBm decides where landmasses sit.
        let macro_h = fbm(
            &self.perm,
            n * p.macro_freq,
            p.macro_octaves,
            p.lacunarity,
            p.gain,
        ) * p.macro_amp;

        // Small-scale relief layered on top.
        let micro_h = fbm(
            &self.perm,
            n * p.micro_freq,
            p.micro_octaves,
            p.lacunarity,
            p.gain,
        ) * p.micro_amp;

        // Sharp mountain ridges.
        let ridge_h = ridged_fbm(
            &self.perm,
            n * p.ridge_freq,
            p.ridge_octaves,
            p.lacunarity,
            p.gain,
        ) * p.ridge_amp;

        // Ridges only survive where the macro layer says there is land;
        // ocean basins stay smooth.
        let continent_mask = smoothstep(0.35, 0.65, macro_h);

        // Slight elevation near the poles, symmetric in |y|.
        let polar_boost = smoothstep(0.6, 0.95, n.y.abs()) * 0.08;

        let height = macro_h * 0.65
            + micro_h * 0.30
            + ridge_h * continent_mask * 0.6
            + polar_boost
            - SEA_LEVEL;

        height * self.scale
    }

    /// Displaced surface point along a direction.
    ///
    /// Equivalent to `normalize(dir) * (radius + height(dir))`.
    pub fn surface_position(&self, dir: Vec3) -> Vec3 {
        let n = dir.normalize_or_zero();
        n * (self.radius + self.height(n))
    }

    /// Displaces a batch of directions.
    ///
    /// Elementwise identical to mapping [`Self::surface_position`] over the
    /// slice in order; evaluation is pure per element, so the work is spread
    /// across the rayon pool.
    pub fn displace_batch(&self, dirs: &[Vec3]) -> Vec<Vec3> {
        dirs.par_iter().map(|&d| self.surface_position(d)).collect()
    }
}

impl Default for PlanetField {
    /// Seed 0 with unit scale and radius, the defined fallback for callers
    /// that query before choosing a seed.
    fn default() -> Self {
        Self::new(0, 1.0, 1.0)
    }
}
