use thiserror::Error;

/// Errors from padded Merkle tree operations.
#[derive(Debug, Error)]
pub enum PaddedMerkleError {
    /// A second build was attempted on an already-built tree.
    #[error("tree was already built")]
    AlreadyBuilt,
    /// A query was made against a tree that has no successful build.
    #[error("tree has not been built")]
    NotBuilt,
    /// A caller-supplied parameter was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The injected hash capability failed mid-operation.
    ///
    /// Fatal for the in-progress build or proof: partial state is left
    /// unspecified and the caller should discard the instance.
    #[error("hash failure: {0}")]
    HashError(String),
}
