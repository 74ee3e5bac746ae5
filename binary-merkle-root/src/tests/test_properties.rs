use proptest::prelude::*;

use crate::{Blake3Hasher, binary_tree_root, binary_tree_root_with_cost, pad_leaves};

fn d(data: &[u8]) -> Vec<u8> {
    blake3::hash(data).as_bytes().to_vec()
}

/// Layer-by-layer reference: hash the leaves, then repeatedly pair nodes,
/// duplicating the last one when a layer is odd, until one node is left.
///
/// Returns `(root, hash_calls)`.
fn layered_root(leaves: &[Vec<u8>]) -> (Vec<u8>, u32) {
    let mut hash_calls = leaves.len() as u32;
    let mut layer: Vec<Vec<u8>> = leaves.iter().map(|leaf| d(leaf)).collect();
    while layer.len() > 1 {
        if layer.len() % 2 == 1 {
            let last = layer[layer.len() - 1].clone();
            layer.push(last);
        }
        layer = layer
            .chunks(2)
            .map(|pair| {
                hash_calls += 1;
                let mut input = pair[0].clone();
                input.extend_from_slice(&pair[1]);
                d(&input)
            })
            .collect();
    }
    (layer.remove(0), hash_calls)
}

fn leaves_strategy(max_count: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..48), 1..max_count)
}

proptest! {
    #[test]
    fn test_root_matches_layered_reference(leaves in leaves_strategy(130)) {
        let (root, hash_calls) = binary_tree_root_with_cost(&leaves, &mut Blake3Hasher)
            .expect("infallible");
        let (expected_root, expected_calls) = layered_root(&leaves);
        prop_assert_eq!(root, Some(expected_root));
        prop_assert_eq!(hash_calls, expected_calls);
    }

    #[test]
    fn test_root_is_deterministic(leaves in leaves_strategy(64)) {
        let first = binary_tree_root(&leaves, &mut Blake3Hasher).expect("infallible");
        let second = binary_tree_root(&leaves, &mut Blake3Hasher).expect("infallible");
        prop_assert!(first.is_some());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_reordering_changes_root(
        leaves in prop::collection::btree_set(prop::collection::vec(any::<u8>(), 1..16), 2..40)
    ) {
        let leaves: Vec<Vec<u8>> = leaves.into_iter().collect();
        let mut rotated = leaves.clone();
        rotated.rotate_left(1);
        let original = binary_tree_root(&leaves, &mut Blake3Hasher).expect("infallible");
        let reordered = binary_tree_root(&rotated, &mut Blake3Hasher).expect("infallible");
        prop_assert_ne!(original, reordered);
    }

    #[test]
    fn test_padding_is_repeatable_and_non_mutating(leaves in leaves_strategy(64)) {
        let before = leaves.clone();
        let padded = pad_leaves(&leaves);
        prop_assert_eq!(padded.len() % 2, 0);
        prop_assert_eq!(padded.len(), leaves.len() + leaves.len() % 2);
        prop_assert_eq!(padded[padded.len() - 1], leaves[leaves.len() - 1].as_slice());
        prop_assert_eq!(pad_leaves(&leaves), padded);

        binary_tree_root(&leaves, &mut Blake3Hasher).expect("infallible");
        prop_assert_eq!(leaves, before);
    }

    #[test]
    fn test_odd_count_commits_like_explicit_padding(leaves in leaves_strategy(64)) {
        prop_assume!(leaves.len() % 2 == 1 && leaves.len() > 1);
        let padded: Vec<Vec<u8>> = pad_leaves(&leaves).into_iter().map(<[u8]>::to_vec).collect();
        let implicit = binary_tree_root(&leaves, &mut Blake3Hasher).expect("infallible");
        let explicit = binary_tree_root(&padded, &mut Blake3Hasher).expect("infallible");
        prop_assert_eq!(implicit, explicit);
    }
}
