use std::hash::{BuildHasher, Hash};

/// Yields `count` slot indices in `[0, modulus)` for one item, derived from
/// a single 64-bit hash split in two and combined with enhanced double
/// hashing. The same item and build hasher always yield the same indices.
pub(crate) struct Hashes {
    h1: u32,
    h2: u32,
    modulus: u64,
    remaining: usize,
    round: u32,
}

impl Hashes {
    pub fn new<T, H>(item: &T, modulus: u64, count: usize, build_hasher: &H) -> Self
    where
        T: Hash,
        H: BuildHasher,
    {
        let hash = build_hasher.hash_one(item);
        Self {
            h1: (hash >> 32) as u32,
            h2: hash as u32,
            modulus,
            remaining: count,
            round: 0,
        }
    }
}

impl Iterator for Hashes {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.round += 1;
        let i = self.round;
        // h1 + i*h2 + i^3, wrapping; the cubic term keeps probe sequences
        // distinct even when h2 is small.
        let combined = self
            .h1
            .wrapping_add(self.h2.wrapping_mul(i))
            .wrapping_add(i.wrapping_mul(i).wrapping_mul(i));
        Some((combined as u64 % self.modulus) as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{BuildHasherDefault, DefaultHasher};

    fn indices(item: &u64, modulus: u64, count: usize) -> Vec<usize> {
        let build_hasher = BuildHasherDefault::<DefaultHasher>::default();
        Hashes::new(item, modulus, count, &build_hasher).collect()
    }

    #[test]
    fn test_deterministic() {
        for item in 0..100u64 {
            assert_eq!(indices(&item, 977, 7), indices(&item, 977, 7));
        }
    }

    #[test]
    fn test_in_range() {
        for item in 0..100u64 {
            assert!(indices(&item, 977, 7).iter().all(|&index| index < 977));
        }
    }

    #[test]
    fn test_yields_count_indices() {
        assert_eq!(indices(&42u64, 977, 13).len(), 13);
    }
}
