//! Inclusion proofs: one (sibling hash, side) step per level from the
//! leaf up to one below the root.
//!
//! Verification is pure — no tree required. The verifier refolds the
//! steps from the leaf digest and compares against a known root.

use crate::{
    hash::{Hash, TreeHasher},
    PaddedMerkleError,
};

/// Which side of the parent the sibling occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingSide {
    /// The sibling is the left child; the proved node is the right.
    Left,
    /// The sibling is the right child; the proved node is the left.
    Right,
}

/// One proof step: the sibling hash at a level and its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofStep {
    /// The sibling's hash at this level.
    pub hash: Hash,
    /// The side the sibling sits on.
    pub side: SiblingSide,
}

/// An inclusion proof for a single leaf, ordered leaf level first.
///
/// The steps are `pub(crate)`-constructed so a proof always comes from
/// [`PaddedMerkleTree::prove`](crate::PaddedMerkleTree::prove).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionProof {
    steps: Vec<ProofStep>,
}

impl InclusionProof {
    pub(crate) fn new(steps: Vec<ProofStep>) -> Self {
        Self { steps }
    }

    /// The proof steps, from the leaf level upward.
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Number of steps, equal to `tree height - 1`.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` for a height-1 tree, where the leaf digest is the root.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Recompute the root this proof commits `leaf` to.
    ///
    /// Starts from the leaf digest (a zero-length leaf digests to the
    /// canonical empty-leaf hash) and folds each step in order: a left
    /// sibling is combined as `combine(sibling, acc)`, a right sibling
    /// as `combine(acc, sibling)`.
    pub fn compute_root<H: TreeHasher>(
        &self,
        leaf: &[u8],
        hasher: &H,
    ) -> Result<Hash, PaddedMerkleError> {
        let mut current = hasher.hash_leaf(leaf)?;
        for step in &self.steps {
            current = match step.side {
                SiblingSide::Left => hasher.combine(&step.hash, &current)?,
                SiblingSide::Right => hasher.combine(&current, &step.hash)?,
            };
        }
        Ok(current)
    }

    /// Verify that `leaf` is committed under `expected_root`.
    pub fn verify<H: TreeHasher>(
        &self,
        leaf: &[u8],
        expected_root: &Hash,
        hasher: &H,
    ) -> Result<bool, PaddedMerkleError> {
        Ok(&self.compute_root(leaf, hasher)? == expected_root)
    }
}
