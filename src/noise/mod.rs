//! Noise generation module for terrain synthesis.
//!
//! Builds the classic seeded-permutation gradient noise stack: a shuffled
//! lattice table, 3D Perlin noise on top of it, and the fractal combinators
//! (fBm and ridged multifractal) the height field composes from.

mod fractal;
mod perlin;
mod permutation;

pub use fractal::{fbm, ridged_fbm};
pub use perlin::perlin;
pub use permutation::PermutationTable;
