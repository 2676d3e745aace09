use std::{hash::Hash, sync::OnceLock};

use ahash::RandomState;

// Keys are random per process and shared by every digest within it, so equal objects
// always produce equal digests while colliding objects can not be prepared in advance.
static STATE: OnceLock<RandomState> = OnceLock::new();

/// Order-independent accumulator over independently hashed items.
///
/// Each item is hashed on its own and the digests are combined with wrapping addition, so
/// any permutation of the same items yields the same result.
pub(crate) struct UnorderedDigest {
    state: &'static RandomState,
    sum: u64,
}

impl UnorderedDigest {
    pub(crate) fn new() -> Self {
        Self {
            state: STATE.get_or_init(RandomState::new),
            sum: 0,
        }
    }

    #[inline]
    pub(crate) fn add<T: Hash>(&mut self, item: T) {
        self.sum = self.sum.wrapping_add(self.state.hash_one(item));
    }

    pub(crate) fn finish(&self) -> u64 {
        self.sum
    }
}

#[cfg(test)]
mod tests {
    use super::UnorderedDigest;

    fn digest(items: &[(&str, u32)]) -> u64 {
        let mut digest = UnorderedDigest::new();
        for item in items {
            digest.add(item);
        }
        digest.finish()
    }

    #[test]
    fn permutation_invariant() {
        let forward = digest(&[("a", 1), ("b", 2), ("c", 3)]);
        let shuffled = digest(&[("c", 3), ("a", 1), ("b", 2)]);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn pairing_matters() {
        let forward = digest(&[("a", 1), ("b", 2)]);
        let swapped = digest(&[("a", 2), ("b", 1)]);
        assert_ne!(forward, swapped);
    }

    #[test]
    fn keys_are_shared_across_digests() {
        let first = UnorderedDigest::new();
        let second = UnorderedDigest::new();
        assert!(std::ptr::eq(first.state, second.state));
        assert_eq!(digest(&[("x", 7)]), digest(&[("x", 7)]));
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(UnorderedDigest::new().finish(), 0);
    }
}
