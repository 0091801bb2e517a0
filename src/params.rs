//! Seed-derived noise parameters.
//!
//! A seed fully determines the style of a planet: how large its continents
//! are, how rough the detail layer is, how aggressive the mountain ridges
//! get. Each field is sampled from the seed through [`crate::hash`] with its
//! own fixed salt, so the mapping is pure and two fields can never collide.

use serde::{Deserialize, Serialize};

use crate::hash::random_range;

// One stable salt per derived field. These are part of the seed-to-terrain
// contract: changing any of them changes every planet.
const SALT_MACRO_FREQ: u32 = 11;
const SALT_MACRO_OCTAVES: u32 = 12;
const SALT_MACRO_AMP: u32 = 13;
const SALT_MICRO_FREQ: u32 = 21;
const SALT_MICRO_OCTAVES: u32 = 22;
const SALT_MICRO_AMP: u32 = 23;
const SALT_RIDGE_FREQ: u32 = 31;
const SALT_RIDGE_OCTAVES: u32 = 32;
const SALT_RIDGE_AMP: u32 = 33;
const SALT_LACUNARITY: u32 = 41;
const SALT_GAIN: u32 = 42;

/// Noise parameters controlling a planet's terrain style.
///
/// Derived deterministically from a seed by [`NoiseParams::from_seed`] and
/// immutable afterward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    /// Continent-scale noise frequency (0.03-0.18).
    pub macro_freq: f32,
    /// Continent noise octave count (2-4).
    pub macro_octaves: u32,
    /// Continent elevation amplitude (0.6-1.6).
    pub macro_amp: f32,

    /// Small-terrain detail frequency (0.8-3.0).
    pub micro_freq: f32,
    /// Detail noise octave count (2-5).
    pub micro_octaves: u32,
    /// Detail amplitude (0.05-0.5).
    pub micro_amp: f32,

    /// Mountain-ridge noise frequency (0.6-2.5).
    pub ridge_freq: f32,
    /// Ridge noise octave count (1-3).
    pub ridge_octaves: u32,
    /// Ridge amplitude (0.2-1.2).
    pub ridge_amp: f32,

    /// Per-octave frequency multiplier shared by all layers (1.8-2.2).
    pub lacunarity: f32,
    /// Per-octave amplitude decay shared by all layers (0.35-0.6).
    pub gain: f32,
}

impl NoiseParams {
    /// Derives the full parameter set for a seed.
    ///
    /// Octave counts truncate the sampled float, so a documented range of
    /// e.g. `[2.0, 5.0)` yields integer counts 2 through 4.
    pub fn from_seed(seed: u32) -> Self {
        Self {
            macro_freq: random_range(seed, SALT_MACRO_FREQ, 0.03, 0.18),
            macro_octaves: random_range(seed, SALT_MACRO_OCTAVES, 2.0, 5.0) as u32,
            macro_amp: random_range(seed, SALT_MACRO_AMP, 0.6, 1.6),

            micro_freq: random_range(seed, SALT_MICRO_FREQ, 0.8, 3.0),
            micro_octaves: random_range(seed, SALT_MICRO_OCTAVES, 2.0, 6.0) as u32,
            micro_amp: random_range(seed, SALT_MICRO_AMP, 0.05, 0.5),

            ridge_freq: random_range(seed, SALT_RIDGE_FREQ, 0.6, 2.5),
            ridge_octaves: random_range(seed, SALT_RIDGE_OCTAVES, 1.0, 4.0) as u32,
            ridge_amp: random_range(seed, SALT_RIDGE_AMP, 0.2, 1.2),

            lacunarity: random_range(seed, SALT_LACUNARITY, 1.8, 2.2),
            gain: random_range(seed, SALT_GAIN, 0.35, 0.6),
        }
    }
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self::from_seed(0)
    }
}
