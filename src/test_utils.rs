//! Test utilities: instrumented hash capabilities and a reference-root
//! oracle that pads the leaf level in full instead of using the cache.

use std::cell::Cell;

use crate::{Blake3Hasher, Hash, PaddedMerkleError, TreeHasher};

/// Blake3 capability that counts calls, split out by empty-leaf input.
pub(crate) struct CountingHasher {
    inner: Blake3Hasher,
    pub leaf_calls: Cell<u32>,
    pub empty_leaf_calls: Cell<u32>,
    pub combine_calls: Cell<u32>,
}

impl CountingHasher {
    pub fn new() -> Self {
        Self {
            inner: Blake3Hasher,
            leaf_calls: Cell::new(0),
            empty_leaf_calls: Cell::new(0),
            combine_calls: Cell::new(0),
        }
    }
}

impl TreeHasher for CountingHasher {
    fn hash_leaf(&self, data: &[u8]) -> Result<Hash, PaddedMerkleError> {
        self.leaf_calls.set(self.leaf_calls.get() + 1);
        if data.is_empty() {
            self.empty_leaf_calls.set(self.empty_leaf_calls.get() + 1);
        }
        self.inner.hash_leaf(data)
    }

    fn combine(&self, left: &Hash, right: &Hash) -> Result<Hash, PaddedMerkleError> {
        self.combine_calls.set(self.combine_calls.get() + 1);
        self.inner.combine(left, right)
    }
}

/// Capability that fails once a budget of calls is spent.
pub(crate) struct FailingHasher {
    inner: Blake3Hasher,
    remaining: Cell<u32>,
}

impl FailingHasher {
    /// Succeed for the first `calls` invocations, then fail every time.
    pub fn after(calls: u32) -> Self {
        Self {
            inner: Blake3Hasher,
            remaining: Cell::new(calls),
        }
    }

    fn spend(&self) -> Result<(), PaddedMerkleError> {
        let left = self.remaining.get();
        if left == 0 {
            return Err(PaddedMerkleError::HashError(
                "instrumented hash failure".to_string(),
            ));
        }
        self.remaining.set(left - 1);
        Ok(())
    }
}

impl TreeHasher for FailingHasher {
    fn hash_leaf(&self, data: &[u8]) -> Result<Hash, PaddedMerkleError> {
        self.spend()?;
        self.inner.hash_leaf(data)
    }

    fn combine(&self, left: &Hash, right: &Hash) -> Result<Hash, PaddedMerkleError> {
        self.spend()?;
        self.inner.combine(left, right)
    }
}

/// Blake3 with a one-byte domain tag on every input, so two instances
/// with different tags act as genuinely distinct capabilities.
pub(crate) struct TaggedHasher {
    pub tag: u8,
}

impl TreeHasher for TaggedHasher {
    fn hash_leaf(&self, data: &[u8]) -> Result<Hash, PaddedMerkleError> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&[self.tag]);
        hasher.update(data);
        Ok(*hasher.finalize().as_bytes())
    }

    fn combine(&self, left: &Hash, right: &Hash) -> Result<Hash, PaddedMerkleError> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&[self.tag]);
        hasher.update(left);
        hasher.update(right);
        Ok(*hasher.finalize().as_bytes())
    }
}

/// Distinct, deterministic leaves.
pub(crate) fn sample_batch(n: usize) -> Vec<Vec<u8>> {
    (0..n).map(|i| format!("leaf-{i:04}").into_bytes()).collect()
}

/// Reference oracle: materialize the fully padded leaf level (empty
/// digests for every absent slot) and combine pairwise, no cache.
pub(crate) fn padded_pairwise_root(leaves: &[Vec<u8>], capacity: usize) -> Hash {
    let hasher = Blake3Hasher;
    let empty = hasher.hash_leaf(&[]).expect("blake3 does not fail");
    let mut level: Vec<Hash> = leaves
        .iter()
        .map(|leaf| {
            if leaf.is_empty() {
                empty
            } else {
                hasher.hash_leaf(leaf).expect("blake3 does not fail")
            }
        })
        .collect();
    level.resize(capacity, empty);
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                hasher
                    .combine(&pair[0], &pair[1])
                    .expect("blake3 does not fail")
            })
            .collect();
    }
    level[0]
}
