//! Degenerate hashing tools for forcing bucket collisions in tests.

use std::hash::{BuildHasher, Hash, Hasher};

/// A value paired with an explicitly chosen hash. Equality ignores the hash, so two values can
/// be made to collide (same hash, different value) or to disagree with their hashes entirely.
#[derive(Debug)]
pub(crate) struct ForcedHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ForcedHash<T> {
    pub(crate) const fn new(hash: u64, value: T) -> ForcedHash<T> {
        ForcedHash {
            hash,
            value,
        }
    }
}

impl<T: Eq> Hash for ForcedHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for ForcedHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ForcedHash<T> {}

/// A hasher with no avalanche at all: the last `write_u64` wins, and plain writes just fold
/// bytes in. Paired with [`ForcedHash`], the chosen hash passes through unmodified.
#[derive(Debug, Default)]
pub(crate) struct CollidingHasher {
    state: u64,
}

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.rotate_left(8) ^ u64::from(*byte);
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }
}

#[derive(Debug, Default)]
pub(crate) struct CollidingHasherBuilder;

impl BuildHasher for CollidingHasherBuilder {
    type Hasher = CollidingHasher;

    fn build_hasher(&self) -> Self::Hasher {
        CollidingHasher::default()
    }
}
