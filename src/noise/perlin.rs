//! 3D gradient (Perlin) lattice noise.

use glam::Vec3;

use super::PermutationTable;
use crate::math::lerp;

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
///
/// Zero first and second derivatives at the cell boundaries, so adjacent
/// lattice cells join without visible creases.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Gradient dot-product at a lattice corner.
///
/// The low 4 bits of the hash select one of the 12 edge directions of a
/// cube (with 4 repeated); the dot-product with the in-cell offset gives the
/// corner's contribution.
#[inline]
fn grad(hash: usize, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 != 0 { -u } else { u };
    let v = if h & 2 != 0 { -v } else { v };
    u + v
}

/// Samples 3D Perlin noise at `pos`.
///
/// Returns a value in approximately `[-1, 1]`. The same table and position
/// always produce the same value.
pub fn perlin(perm: &PermutationTable, pos: Vec3) -> f32 {
    // Integer lattice cell, masked to the table range.
    let xi = (pos.x.floor() as i32 & 255) as usize;
    let yi = (pos.y.floor() as i32 & 255) as usize;
    let zi = (pos.z.floor() as i32 & 255) as usize;

    // Fractional offset within the cell.
    let x = pos.x - pos.x.floor();
    let y = pos.y - pos.y.floor();
    let z = pos.z - pos.z.floor();

    let u = fade(x);
    let v = fade(y);
    let w = fade(z);

    // Hash indices for the 8 cell corners.
    let a = perm.get(xi) + yi;
    let aa = perm.get(a) + zi;
    let ab = perm.get(a + 1) + zi;
    let b = perm.get(xi + 1) + yi;
    let ba = perm.get(b) + zi;
    let bb = perm.get(b + 1) + zi;

    lerp(
        lerp(
            lerp(
                grad(perm.get(aa), x, y, z),
                grad(perm.get(ba), x - 1.0, y, z),
                u,
            ),
            lerp(
                grad(perm.get(ab), x, y - 1.0, z),
                grad(perm.get(bb), x - 1.0, y - 1.0, z),
                u,
            ),
            v,
        ),
        lerp(
            lerp(
                grad(perm.get(aa + 1), x, y, z - 1.0),
                grad(perm.get(ba + 1), x - 1.0, y, z - 1.0),
                u,
            ),
            lerp(
                grad(perm.get(ab + 1), x, y - 1.0, z - 1.0),
                grad(perm.get(bb + 1), x - 1.0, y - 1.0, z - 1.0),
                u,
            ),
            v,
        ),
        w,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let perm = PermutationTable::new(12345);
        let pos = Vec3::new(0.5, 0.3, 0.7);
        assert_eq!(perlin(&perm, pos), perlin(&perm, pos));
    }

    #[test]
    fn test_range() {
        let perm = PermutationTable::new(42);
        for i in 0..2000 {
            let t = i as f32 * 0.173;
            let pos = Vec3::new(t.sin() * 3.0, t.cos() * 2.0, t * 0.11);
            let n = perlin(&perm, pos);
            assert!(
                (-1.0..=1.0).contains(&n),
                "perlin({:?}) = {} outside [-1, 1]",
                pos,
                n
            );
            assert!(n.is_finite());
        }
    }

    #[test]
    fn test_zero_at_lattice_points() {
        // Gradient noise vanishes at integer lattice coordinates: the
        // fractional offset at the owning corner is zero.
        let perm = PermutationTable::new(7);
        for p in [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 5.0, -6.0),
        ] {
            let n = perlin(&perm, p);
            assert!(n.abs() < 1e-6, "expected ~0 at lattice point {:?}, got {}", p, n);
        }
    }

    #[test]
    fn test_different_tables_produce_different_fields() {
        let a = PermutationTable::new(1);
        let b = PermutationTable::new(2);
        let pos = Vec3::new(0.37, 1.91, -2.45);
        assert_ne!(perlin(&a, pos), perlin(&b, pos));
    }

    #[test]
    fn test_continuity_across_cell_boundary() {
        // Values just inside and just outside a cell boundary should be
        // close (the fade curve has zero derivative at the boundary).
        let perm = PermutationTable::new(99);
        let eps = 1e-4;
        let below = perlin(&perm, Vec3::new(1.0 - eps, 0.4, 0.6));
        let above = perlin(&perm, Vec3::new(1.0 + eps, 0.4, 0.6));
        assert!(
            (below - above).abs() < 1e-2,
            "discontinuity across cell boundary: {} vs {}",
            below,
            above
        );
    }
}
