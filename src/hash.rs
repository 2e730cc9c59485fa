//! The injected hashing capability and its default Blake3 instantiation.
//!
//! The tree never hashes bytes itself; it sequences operands
//! deterministically (first operand, then second) and delegates to a
//! [`TreeHasher`]. The capability is pure from the caller's point of
//! view: no accumulator state survives a call, so one instance can back
//! a whole build without any reset discipline.

use crate::PaddedMerkleError;

/// A 32-byte digest. Compared by byte equality only.
pub type Hash = [u8; 32];

/// A deterministic hashing capability injected into the tree engine.
///
/// Implementations take `&self`, so a stateless capability is freely
/// shareable across read-only queries. A stateful implementation must
/// keep each call internally atomic; the safe default is one instance
/// per build.
pub trait TreeHasher {
    /// Digest of a single leaf's bytes.
    ///
    /// The zero-length input is the empty-leaf sentinel; its digest is
    /// the canonical `EmptyLeafHash`. No domain-separation prefix is
    /// applied — the leaf bytes are hashed directly.
    fn hash_leaf(&self, data: &[u8]) -> Result<Hash, PaddedMerkleError>;

    /// Digest of two child hashes, left operand first.
    fn combine(&self, left: &Hash, right: &Hash) -> Result<Hash, PaddedMerkleError>;
}

/// The default capability: plain Blake3 over the concatenated inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl TreeHasher for Blake3Hasher {
    fn hash_leaf(&self, data: &[u8]) -> Result<Hash, PaddedMerkleError> {
        Ok(*blake3::hash(data).as_bytes())
    }

    fn combine(&self, left: &Hash, right: &Hash) -> Result<Hash, PaddedMerkleError> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(left);
        hasher.update(right);
        Ok(*hasher.finalize().as_bytes())
    }
}
