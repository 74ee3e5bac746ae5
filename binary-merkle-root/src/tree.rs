use tracing::trace;

use crate::{
    BinaryMerkleError, DigestHasher,
    sizing::{leaf_offset, tree_size},
};

/// Return the leaves to commit to, with the last leaf repeated when the
/// count is odd.
///
/// The result borrows the caller's buffers; the input slice is never
/// modified. An empty input gives an empty result.
pub fn pad_leaves<L: AsRef<[u8]>>(leaves: &[L]) -> Vec<&[u8]> {
    let mut padded: Vec<&[u8]> = Vec::with_capacity(leaves.len() + 1);
    padded.extend(leaves.iter().map(AsRef::as_ref));
    if padded.len() % 2 == 1 {
        let last = padded[padded.len() - 1];
        padded.push(last);
    }
    padded
}

/// A binary Merkle tree held as a flat array of optional digests.
///
/// Positions are indexed level-order (BFS): root=0, left child=2i+1, right
/// child=2i+2. For `n` leaves the leaf layer is `P = next_power_of_two(n)`
/// slots wide and the array holds `2P - 1` slots, the last `P` of which are
/// the leaf layer. Leaf digests occupy the first `n` leaf slots; everything
/// to their right stays empty.
///
/// Combining runs bottom-up over every internal slot:
///
/// - both children empty: the parent stays empty;
/// - only the left child set: the parent is `H(left || left)`;
/// - both set: the parent is `H(left || right)`.
///
/// The root is the exception to the second rule. `P` is strictly greater
/// than `n`, so when `n` is a power of two the leaves all sit under the
/// root's left child and the top level carries no data. In that case the
/// root is the left child's digest as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplicitTree {
    slots: Vec<Option<Vec<u8>>>,
    leaf_count: usize,
    hash_calls: u32,
}

impl ImplicitTree {
    /// Hash `leaves` and build every level of the tree above them.
    ///
    /// An empty leaf sequence gives a single empty slot and no root. Hasher
    /// errors abort the build and are returned unchanged.
    pub fn build<L, H>(leaves: &[L], hasher: &mut H) -> Result<Self, H::Error>
    where
        L: AsRef<[u8]>,
        H: DigestHasher + ?Sized,
    {
        let leaf_count = leaves.len();
        let padded = pad_leaves(leaves);

        // Sizing always follows the unpadded count.
        let size = tree_size(leaf_count as u64) as usize;
        let offset = leaf_offset(leaf_count as u64) as usize;
        trace!(
            target: "binary_merkle_root",
            leaf_count,
            padded_count = padded.len(),
            size,
            offset,
            "sizing implicit tree"
        );

        let mut slots: Vec<Option<Vec<u8>>> = vec![None; size];
        let mut hash_calls: u32 = 0;

        for (position, leaf) in padded.iter().take(leaf_count).enumerate() {
            slots[offset + position] = Some(hasher.digest(leaf)?);
            hash_calls += 1;
        }

        for index in (0..offset).rev() {
            let left = &slots[2 * index + 1];
            let right = &slots[2 * index + 2];
            let node = match (left, right) {
                (None, None) => None,
                (Some(left), None) if index == 0 => Some(left.clone()),
                (Some(left), None) => {
                    hash_calls += 1;
                    Some(combine(hasher, left, left)?)
                }
                (left, Some(right)) => {
                    hash_calls += 1;
                    Some(combine(hasher, left.as_deref().unwrap_or_default(), right)?)
                }
            };
            slots[index] = node;
        }

        Ok(Self {
            slots,
            leaf_count,
            hash_calls,
        })
    }

    /// The root digest, or `None` for an empty tree.
    pub fn root(&self) -> Option<&[u8]> {
        self.slots[0].as_deref()
    }

    /// Consume the tree and return the root digest.
    pub fn into_root(mut self) -> Option<Vec<u8>> {
        self.slots.swap_remove(0)
    }

    /// The digest stored at `index`, or `None` if that slot is empty.
    ///
    /// Returns an error if `index` is past the end of the array.
    pub fn node(&self, index: usize) -> Result<Option<&[u8]>, BinaryMerkleError> {
        self.slots
            .get(index)
            .map(Option::as_deref)
            .ok_or(BinaryMerkleError::NodeOutOfRange {
                index,
                len: self.slots.len(),
            })
    }

    /// Number of slots in the array. Always odd.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: even an empty tree keeps its (unset) root slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of leaves the tree was built from, before padding.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Index of the first leaf slot.
    pub fn leaf_offset(&self) -> usize {
        self.slots.len() / 2
    }

    /// Number of times the hasher was invoked while building.
    pub fn hash_calls(&self) -> u32 {
        self.hash_calls
    }
}

/// `H(left || right)`.
fn combine<H>(hasher: &mut H, left: &[u8], right: &[u8]) -> Result<Vec<u8>, H::Error>
where
    H: DigestHasher + ?Sized,
{
    let mut input = Vec::with_capacity(left.len() + right.len());
    input.extend_from_slice(left);
    input.extend_from_slice(right);
    hasher.digest(&input)
}
