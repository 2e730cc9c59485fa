//! Padded Merkle tree — a deterministic batch-commitment primitive.
//!
//! Builds a binary hash tree over an ordered batch of leaf values,
//! padding batches smaller than a power-of-two capacity with a
//! canonical empty leaf and cached empty-subtree hashes. The single
//! root hash is the commitment; per-leaf inclusion proofs let a
//! verifier recompute the root from one leaf value and a short path.
//!
//! # Core types
//!
//! - [`PaddedMerkleTree`] — level-materializing builder (build once,
//!   then read the root and derive proofs).
//! - [`InclusionProof`] — per-leaf audit path with pure verification.
//! - [`RecursiveRootBuilder`] — root-only divide-and-conquer builder
//!   with O(log n) working memory and no proof support.
//! - [`EmptySubtreeCache`] — per-height hashes of all-empty subtrees,
//!   shared by both builder strategies.
//!
//! # Hashing
//!
//! All hashing goes through an injected [`TreeHasher`] capability;
//! [`Blake3Hasher`] is the default instantiation. The engine sequences
//! operands deterministically and never hashes bytes itself.
//!
//! ```
//! use padded_merkle_tree::{Blake3Hasher, PaddedMerkleTree};
//!
//! let hasher = Blake3Hasher;
//! let leaves = vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()];
//! let mut tree = PaddedMerkleTree::new();
//! tree.build(&leaves, 4, &hasher).expect("build");
//! let root = tree.root_hash().expect("built");
//!
//! let proof = tree.prove(2).expect("leaf 2 exists");
//! assert!(proof.verify(b"c", &root, &hasher).expect("hashing"));
//! ```

#![warn(missing_docs)]

mod empty;
mod error;
mod hash;
mod proof;
mod recursive;
mod tree;

#[cfg(test)]
pub(crate) mod test_utils;

pub use empty::EmptySubtreeCache;
pub use error::PaddedMerkleError;
pub use hash::{Blake3Hasher, Hash, TreeHasher};
pub use proof::{InclusionProof, ProofStep, SiblingSide};
pub use recursive::RecursiveRootBuilder;
pub use tree::PaddedMerkleTree;
