//! Root-only builder: divide-and-conquer over a power-of-two batch
//! without materializing levels, O(log n) working memory.
//!
//! Trades proof capability for memory; use
//! [`PaddedMerkleTree`](crate::PaddedMerkleTree) when inclusion proofs
//! will be requested later. Supports distinct leaf-hash and
//! internal-node-hash capabilities.

use crate::{
    empty::EmptySubtreeCache,
    hash::{Hash, TreeHasher},
    PaddedMerkleError,
};

/// Computes Merkle roots recursively, keeping only the last result.
///
/// Empty (zero-length) leaves must form a contiguous trailing block:
/// the recursion treats any range whose first leaf is empty as an
/// all-empty subtree and short-circuits to its cached hash, so a
/// non-empty leaf after an empty one would be silently skipped. The
/// builder validates this up front and rejects violating batches.
#[derive(Debug, Clone, Default)]
pub struct RecursiveRootBuilder {
    root: Option<Hash>,
}

impl RecursiveRootBuilder {
    /// Create a builder with no computed root.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last-computed root, if any build has succeeded.
    pub fn root(&self) -> Option<&Hash> {
        self.root.as_ref()
    }

    /// Compute the root of `leaves` with one capability for both leaf
    /// and internal hashing.
    pub fn build_root<H: TreeHasher>(
        &mut self,
        leaves: &[Vec<u8>],
        hasher: &H,
    ) -> Result<Hash, PaddedMerkleError> {
        self.build_root_with(leaves, hasher, hasher)
    }

    /// Compute the root of `leaves`, hashing leaves with `leaf_hasher`
    /// and combining children with `node_hasher`.
    ///
    /// `leaves.len()` must be a power of two, and empty leaves must
    /// occupy a contiguous trailing block.
    pub fn build_root_with<L: TreeHasher, N: TreeHasher>(
        &mut self,
        leaves: &[Vec<u8>],
        leaf_hasher: &L,
        node_hasher: &N,
    ) -> Result<Hash, PaddedMerkleError> {
        if leaves.is_empty() || !leaves.len().is_power_of_two() {
            return Err(PaddedMerkleError::InvalidArgument(format!(
                "leaf count {} is not a power of two",
                leaves.len()
            )));
        }
        let empty_count = match leaves.iter().position(|leaf| leaf.is_empty()) {
            Some(first_empty) => {
                if leaves[first_empty..].iter().any(|leaf| !leaf.is_empty()) {
                    return Err(PaddedMerkleError::InvalidArgument(
                        "empty leaves must form a contiguous trailing block".to_string(),
                    ));
                }
                leaves.len() - first_empty
            }
            None => 0,
        };

        let cache = EmptySubtreeCache::compute(
            leaf_hasher,
            node_hasher,
            EmptySubtreeCache::levels_for_gap(empty_count),
        )?;

        let root = subtree_root(leaves, leaf_hasher, node_hasher, &cache)?;
        self.root = Some(root);
        Ok(root)
    }
}

/// Root of one aligned range. `range` is a non-empty power of two.
fn subtree_root<L: TreeHasher, N: TreeHasher>(
    range: &[Vec<u8>],
    leaf_hasher: &L,
    node_hasher: &N,
    cache: &EmptySubtreeCache,
) -> Result<Hash, PaddedMerkleError> {
    // First leaf empty means the whole range is (validated upfront);
    // its hash is the cached empty subtree of height log2(len).
    if range[0].is_empty() {
        return cache.hash_at(range.len().ilog2() as usize).copied();
    }

    match range.len() {
        1 => leaf_hasher.hash_leaf(&range[0]),
        2 => {
            let left = leaf_hasher.hash_leaf(&range[0])?;
            let right = if range[1].is_empty() {
                *cache.hash_at(0)?
            } else {
                leaf_hasher.hash_leaf(&range[1])?
            };
            node_hasher.combine(&left, &right)
        }
        len => {
            let (lower, upper) = range.split_at(len / 2);
            let left = subtree_root(lower, leaf_hasher, node_hasher, cache)?;
            let right = subtree_root(upper, leaf_hasher, node_hasher, cache)?;
            node_hasher.combine(&left, &right)
        }
    }
}
