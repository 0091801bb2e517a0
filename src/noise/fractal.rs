//! Fractal combinators: fBm and ridged multifractal noise.

use glam::Vec3;

use super::{PermutationTable, perlin};

/// Fractal Brownian motion: a normalized multi-octave sum of Perlin noise.
///
/// Each octave runs at `lacunarity` times the previous frequency and `gain`
/// times the previous amplitude. Octave outputs are remapped from `[-1, 1]`
/// to `[0, 1]` before weighting, and the sum is normalized by the total
/// accumulated amplitude, so the result stays in `[0, 1]`.
///
/// Returns 0.0 when no amplitude accumulates (`octaves == 0` or a gain that
/// collapses every weight), never dividing by zero.
pub fn fbm(
    perm: &PermutationTable,
    pos: Vec3,
    octaves: u32,
    lacunarity: f32,
    gain: f32,
) -> f32 {
    let mut amplitude = 1.0f32;
    let mut frequency = 1.0f32;
    let mut sum = 0.0f32;
    let mut max_amp = 0.0f32;

    for _ in 0..octaves {
        let n = perlin(perm, pos * frequency);
        let n = n * 0.5 + 0.5;

        sum += n * amplitude;
        max_amp += amplitude;

        amplitude *= gain;
        frequency *= lacunarity;
    }

    if max_amp == 0.0 {
        return 0.0;
    }
    sum / max_amp
}

/// Ridged multifractal noise for sharp, connected mountain ridges.
///
/// Per octave the raw noise is folded toward ridges via `(1 - |n|)^2` and
/// multiplied by a weight carried from the previous octave
/// (`clamp(n * gain, 0, 1)`). The carry is what connects ridge lines across
/// octaves; without it the output degrades into isolated peaks. The octave
/// amplitude halves each step regardless of `gain`, which here only feeds
/// the weight carry.
///
/// Output is non-negative, typically in `[0, ~1.2]`.
pub fn ridged_fbm(
    perm: &PermutationTable,
    pos: Vec3,
    octaves: u32,
    lacunarity: f32,
    gain: f32,
) -> f32 {
    let mut sum = 0.0f32;
    let mut frequency = 1.0f32;
    let mut amplitude = 1.0f32;
    let mut weight = 1.0f32;

    for _ in 0..octaves {
        let n = perlin(perm, pos * frequency);

        let n = 1.0 - n.abs();
        let n = n * n * weight;

        sum += n * amplitude;

        weight = (n * gain).clamp(0.0, 1.0);

        frequency *= lacunarity;
        amplitude *= 0.5;
    }

    sum
}
