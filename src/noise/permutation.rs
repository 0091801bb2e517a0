//! Seeded permutation table backing the gradient noise lattice.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// A seeded shuffle of `0..=255`, duplicated to 512 entries.
///
/// The duplication lets lattice lookups index with offsets up to 255 past a
/// table value without wrapping arithmetic. Two tables built from the same
/// seed are byte-identical, which is what makes a seed reproduce the same
/// planet.
///
/// The shuffle uses a `ChaCha8Rng` seeded solely from the input seed; the
/// generator state never escapes the constructor, so the seed-to-table
/// mapping is a pure function.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    table: [u8; 512],
}

impl PermutationTable {
    /// Builds the table for a seed.
    pub fn new(seed: u32) -> Self {
        let mut first: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        first.shuffle(&mut rng);

        let mut table = [0u8; 512];
        table[..256].copy_from_slice(&first);
        table[256..].copy_from_slice(&first);
        Self { table }
    }

    /// Table lookup. Valid for indices up to 511.
    #[inline]
    pub(crate) fn get(&self, i: usize) -> usize {
        self.table[i] as usize
    }
}

impl Default for PermutationTable {
    /// The seed-0 table, used as the defined fallback for queries made
    /// before any explicit seeding.
    fn default() -> Self {
        Self::new(0)
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("table", &&self.table[..8])
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_identical_tables() {
        let a = PermutationTable::new(42);
        let b = PermutationTable::new(42);
        assert_eq!(a, b, "same seed must produce byte-identical tables");
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = PermutationTable::new(1);
        let b = PermutationTable::new(2);
        assert_ne!(a, b, "different seeds should produce different tables");
    }

    #[test]
    fn test_is_a_permutation() {
        let table = PermutationTable::new(12345);
        let mut seen = [false; 256];
        for i in 0..256 {
            seen[table.get(i)] = true;
        }
        assert!(
            seen.iter().all(|&s| s),
            "first 256 entries must cover every value in 0..=255"
        );
    }

    #[test]
    fn test_second_half_duplicates_first() {
        let table = PermutationTable::new(7);
        for i in 0..256 {
            assert_eq!(table.get(i), table.get(i + 256));
        }
    }

    #[test]
    fn test_default_is_seed_zero() {
        assert_eq!(PermutationTable::default(), PermutationTable::new(0));
    }
}
