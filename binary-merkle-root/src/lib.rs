//! Binary Merkle root over an ordered sequence of byte-string leaves.
//!
//! The tree is an implicit complete binary tree stored as a flat array of
//! optional digest slots in level order (BFS): root=0, left child=2i+1,
//! right child=2i+2. The leaf layer has width `next_power_of_two(n)`, which
//! is strictly greater than `n`, so the array always holds `2P - 1` slots.
//!
//! Leaf digests fill the leaf layer left to right and parents are combined
//! bottom-up as `H(left || right)`. A parent whose right child is empty uses
//! a copy of the left digest in its place; the root instead takes its left
//! child unchanged when its whole right subtree is empty, which happens for
//! every power-of-two leaf count. The result is the usual "duplicate the odd
//! node" binary Merkle root:
//!
//! - `root([]) = None`
//! - `root([L]) = H(L)`
//! - `root([A, B, C]) = H(H(H(A) || H(B)) || H(H(C) || H(C)))`
//!
//! The hash function is supplied by the caller through [`DigestHasher`];
//! [`Blake3Hasher`] is provided behind the default `blake3` feature.

#![warn(missing_docs)]

mod error;
mod hasher;
mod root;
mod sizing;
mod tree;

#[cfg(all(test, feature = "blake3"))]
mod tests;

pub use error::BinaryMerkleError;
#[cfg(feature = "blake3")]
pub use hasher::Blake3Hasher;
pub use hasher::DigestHasher;
pub use root::{binary_tree_root, binary_tree_root_with_cost};
pub use sizing::{
    MAX_LEAF_COUNT, checked_next_power_of_two, checked_tree_size, is_power_of_two, leaf_offset,
    next_power_of_two, tree_size,
};
pub use tree::{ImplicitTree, pad_leaves};
