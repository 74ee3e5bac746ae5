use tracing::debug;

use crate::{DigestHasher, ImplicitTree};

/// Compute the binary Merkle root of `leaves` with the given hasher.
///
/// Returns `Ok(None)` for an empty leaf sequence. Errors from the hasher
/// are returned unchanged; there is no partial result.
///
/// See [`ImplicitTree`] for the tree layout and combining rules.
pub fn binary_tree_root<L, H>(leaves: &[L], hasher: &mut H) -> Result<Option<Vec<u8>>, H::Error>
where
    L: AsRef<[u8]>,
    H: DigestHasher + ?Sized,
{
    binary_tree_root_with_cost(leaves, hasher).map(|(root, _)| root)
}

/// Like [`binary_tree_root`], also returning the number of hasher calls.
///
/// Returns `(root, hash_calls)`. `n` leaves cost `n` leaf hashes plus one
/// call per combined internal node.
pub fn binary_tree_root_with_cost<L, H>(
    leaves: &[L],
    hasher: &mut H,
) -> Result<(Option<Vec<u8>>, u32), H::Error>
where
    L: AsRef<[u8]>,
    H: DigestHasher + ?Sized,
{
    if leaves.is_empty() {
        debug!(target: "binary_merkle_root", "empty leaf sequence has no root");
        return Ok((None, 0));
    }

    let tree = ImplicitTree::build(leaves, hasher)?;
    let hash_calls = tree.hash_calls();
    let root = tree.into_root();
    if let Some(root) = &root {
        debug!(
            target: "binary_merkle_root",
            leaf_count = leaves.len(),
            hash_calls,
            root = %hex::encode(root),
            "computed binary merkle root"
        );
    }
    Ok((root, hash_calls))
}
