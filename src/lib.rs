//! Deterministic procedural planet height-field synthesizer.
//!
//! This crate maps an integer seed and a direction on the unit sphere to a
//! signed elevation, used to displace a sphere mesh into planet-like
//! terrain. The stack is built leaf-first: seeded scalar hashing, a shuffled
//! permutation table, 3D gradient noise, fractal combinators (fBm and ridged
//! multifractal), seed-derived parameters, and finally the height field that
//! composes them with a continent mask and polar boost.

pub mod export;
pub mod hash;
pub mod math;
pub mod noise;
pub mod params;
pub mod terrain;

pub use export::{HeightGrid, export_height_png, export_height_raw};
pub use noise::{PermutationTable, fbm, perlin, ridged_fbm};
pub use params::NoiseParams;
pub use terrain::PlanetField;
