//! Per-height hashes of subtrees filled entirely with empty leaves.
//!
//! A level with an odd count of real nodes pads its trailing node's
//! sibling with the empty-subtree hash of matching height, so both
//! builder strategies consult one shared, read-only cache instead of
//! re-deriving the same digests.

use crate::{
    hash::{Hash, TreeHasher},
    PaddedMerkleError,
};

/// Precomputed hashes of all-empty subtrees, indexed by height.
///
/// Entry 0 is the `EmptyLeafHash` (digest of the zero-length leaf);
/// entry `h` is `combine(entry[h-1], entry[h-1])`, since an empty
/// subtree's two children are themselves identical empty subtrees.
#[derive(Debug, Clone, Default)]
pub struct EmptySubtreeCache {
    hashes: Vec<Hash>,
}

impl EmptySubtreeCache {
    /// Eagerly compute the cache for heights `0..levels`.
    ///
    /// The empty-leaf digest is computed at most once (entry 0); every
    /// further entry costs one combine. `levels == 0` yields an empty
    /// cache for builds that need no padding.
    pub fn compute<L, N>(
        leaf_hasher: &L,
        node_hasher: &N,
        levels: usize,
    ) -> Result<Self, PaddedMerkleError>
    where
        L: TreeHasher + ?Sized,
        N: TreeHasher + ?Sized,
    {
        let mut hashes = Vec::with_capacity(levels);
        if levels > 0 {
            hashes.push(leaf_hasher.hash_leaf(&[])?);
            for h in 1..levels {
                let below = &hashes[h - 1];
                let combined = node_hasher.combine(below, below)?;
                hashes.push(combined);
            }
        }
        Ok(Self { hashes })
    }

    /// How many cache levels are needed to pad `missing` absent leaves:
    /// `floor(log2(missing)) + 1`, or 0 when nothing is missing.
    ///
    /// The largest all-empty subtree a gap of `missing` leaves can form
    /// has height `floor(log2(missing))`, so heights above that are
    /// never requested.
    pub fn levels_for_gap(missing: usize) -> usize {
        if missing == 0 {
            0
        } else {
            missing.ilog2() as usize + 1
        }
    }

    /// The empty-subtree hash for the given height.
    pub fn hash_at(&self, height: usize) -> Result<&Hash, PaddedMerkleError> {
        self.hashes.get(height).ok_or_else(|| {
            PaddedMerkleError::InvalidArgument(format!(
                "empty-subtree hash for height {} was not precomputed (cache holds {} levels)",
                height,
                self.hashes.len()
            ))
        })
    }

    /// The memoized digest of the zero-length leaf, if the cache holds
    /// any levels at all.
    pub fn empty_leaf_hash(&self) -> Option<&Hash> {
        self.hashes.first()
    }

    /// Number of precomputed levels.
    pub fn levels(&self) -> usize {
        self.hashes.len()
    }
}
