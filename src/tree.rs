//! The level-materializing builder: every tree level is stored, which
//! makes root reads O(1) and inclusion proofs a walk up the levels.

use crate::{
    empty::EmptySubtreeCache,
    hash::{Hash, TreeHasher},
    proof::{InclusionProof, ProofStep, SiblingSide},
    PaddedMerkleError,
};

/// A fixed-capacity Merkle tree over an ordered leaf batch.
///
/// The batch may be smaller than the power-of-two capacity; absent
/// leaves are padded with cached empty-subtree hashes. One instance is
/// built exactly once and is immutable afterwards, so root and proof
/// queries are safe to run concurrently once [`build`](Self::build) has
/// returned.
///
/// Levels are indexed bottom-up: level 0 holds the leaf digests, level
/// `height - 1` the single root.
#[derive(Debug, Clone, Default)]
pub struct PaddedMerkleTree {
    levels: Vec<Vec<Hash>>,
    capacity: usize,
    height: usize,
    leaf_count: usize,
    empty: EmptySubtreeCache,
    built: bool,
}

impl PaddedMerkleTree {
    /// Create a new, unbuilt tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build all levels bottom-up from `leaves` toward `capacity`.
    ///
    /// `capacity` must be a power of two and at least `leaves.len()`.
    /// A zero-length leaf is the empty-leaf sentinel and contributes
    /// the memoized empty-leaf digest at level 0. Fails with
    /// [`PaddedMerkleError::AlreadyBuilt`] on a second call; a failed
    /// build leaves the instance unbuilt with no root observable.
    pub fn build<H: TreeHasher>(
        &mut self,
        leaves: &[Vec<u8>],
        capacity: usize,
        hasher: &H,
    ) -> Result<(), PaddedMerkleError> {
        if self.built {
            return Err(PaddedMerkleError::AlreadyBuilt);
        }
        if capacity == 0 || !capacity.is_power_of_two() {
            return Err(PaddedMerkleError::InvalidArgument(format!(
                "capacity {} is not a power of two",
                capacity
            )));
        }
        if leaves.len() > capacity {
            return Err(PaddedMerkleError::InvalidArgument(format!(
                "leaf count {} exceeds capacity {}",
                leaves.len(),
                capacity
            )));
        }

        let height = capacity.ilog2() as usize + 1;

        // Only enough empty-subtree levels to cover the largest gap the
        // padding can form; one extra level when the batch itself
        // carries empty sentinels, so the empty-leaf digest is computed
        // at most once.
        let missing = capacity - leaves.len();
        let mut cache_levels = EmptySubtreeCache::levels_for_gap(missing);
        if leaves.iter().any(|leaf| leaf.is_empty()) {
            cache_levels = cache_levels.max(1);
        }
        let empty = EmptySubtreeCache::compute(hasher, hasher, cache_levels)?;

        // An empty batch commits to the all-empty tree; the root is
        // served straight from the cache, no levels materialized.
        let mut levels = Vec::with_capacity(height);
        if !leaves.is_empty() {
            let mut level = Vec::with_capacity(leaves.len());
            for leaf in leaves {
                let digest = if leaf.is_empty() {
                    *empty.hash_at(0)?
                } else {
                    hasher.hash_leaf(leaf)?
                };
                level.push(digest);
            }
            levels.push(level);

            for h in 0..height - 1 {
                let below = &levels[h];
                let mut above = Vec::with_capacity(below.len().div_ceil(2));
                let mut i = 0;
                while i + 1 < below.len() {
                    above.push(hasher.combine(&below[i], &below[i + 1])?);
                    i += 2;
                }
                // Odd count: pair the trailing node with the empty
                // subtree of matching height.
                if i < below.len() {
                    above.push(hasher.combine(&below[i], empty.hash_at(h)?)?);
                }
                levels.push(above);
            }
        }

        self.levels = levels;
        self.capacity = capacity;
        self.height = height;
        self.leaf_count = leaves.len();
        self.empty = empty;
        self.built = true;
        Ok(())
    }

    /// The root commitment, or `None` if the tree is unbuilt.
    pub fn root_hash(&self) -> Option<Hash> {
        if !self.built {
            return None;
        }
        if self.leaf_count == 0 {
            return self.empty.hash_at(self.height - 1).ok().copied();
        }
        self.levels.last().and_then(|top| top.first()).copied()
    }

    /// Generate an inclusion proof for the leaf at `leaf_index`.
    ///
    /// Walks from the leaf level to one below the root, emitting the
    /// sibling hash and its side per level; a missing right sibling is
    /// the cached empty-subtree hash of that height.
    pub fn prove(&self, leaf_index: usize) -> Result<InclusionProof, PaddedMerkleError> {
        if !self.built {
            return Err(PaddedMerkleError::NotBuilt);
        }
        if leaf_index >= self.leaf_count {
            return Err(PaddedMerkleError::InvalidArgument(format!(
                "leaf index {} is out of range (count={})",
                leaf_index, self.leaf_count
            )));
        }

        let mut steps = Vec::with_capacity(self.height.saturating_sub(1));
        let mut k = leaf_index;
        for h in 0..self.height - 1 {
            let level = &self.levels[h];
            let step = if k % 2 == 1 {
                ProofStep {
                    hash: level[k - 1],
                    side: SiblingSide::Left,
                }
            } else {
                let hash = match level.get(k + 1) {
                    Some(sibling) => *sibling,
                    None => *self.empty.hash_at(h)?,
                };
                ProofStep {
                    hash,
                    side: SiblingSide::Right,
                }
            };
            steps.push(step);
            k /= 2;
        }
        Ok(InclusionProof::new(steps))
    }

    /// Whether a build has completed on this instance.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// The power-of-two capacity the tree was built toward. 0 if unbuilt.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of levels: `log2(capacity) + 1`. 0 if unbuilt.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of supplied leaves. 0 if unbuilt or built empty.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// The nodes of one level, bottom-up.
    #[cfg(test)]
    pub(crate) fn level(&self, height: usize) -> Option<&[Hash]> {
        self.levels.get(height).map(Vec::as_slice)
    }
}
