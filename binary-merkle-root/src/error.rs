use thiserror::Error;

/// Errors from binary Merkle tree sizing and inspection.
///
/// Failures of the caller's hash function are not represented here; they
/// are returned as the hasher's own error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinaryMerkleError {
    /// The leaf count is at or above `2^63`, where the leaf-layer width no
    /// longer fits in a `u64`.
    #[error("leaf count {count} is too large to size a tree (must be below 2^63)")]
    LeafCountTooLarge { count: u64 },
    /// A slot index past the end of the tree array.
    #[error("node index {index} out of range for a tree of {len} slots")]
    NodeOutOfRange { index: usize, len: usize },
}
