//! Terrain synthesis: the planet height field.

mod field;

pub use field::PlanetField;
