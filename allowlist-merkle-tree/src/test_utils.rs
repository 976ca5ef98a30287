//! Test utilities: sample values and an independent root computation.

use crate::{Address, Digest, MerkleHasher, hash::compare_digests, leaf_digest, pair_hash};

/// Address `0xaaaa...aa<last>`.
pub(crate) fn addr(last: u8) -> Address {
    let mut bytes = [0xAAu8; 20];
    bytes[19] = last;
    Address(bytes)
}

/// `count` distinct addresses derived from a counter.
pub(crate) fn addresses(count: usize) -> Vec<Address> {
    (0..count as u64)
        .map(|i| {
            let mut bytes = [0u8; 20];
            bytes[12..].copy_from_slice(&(i + 1).to_be_bytes());
            Address(bytes)
        })
        .collect()
}

/// Sorted leaf digests for `values`.
pub(crate) fn sorted_leaves<H: MerkleHasher>(values: &[Address]) -> Vec<Digest> {
    let mut leaves: Vec<Digest> = values.iter().map(leaf_digest::<Address, H>).collect();
    leaves.sort_by(compare_digests);
    leaves
}

/// Recompute a node of the flat layout recursively from the sorted leaves,
/// without materializing the node array.
pub(crate) fn reference_node<H: MerkleHasher>(leaves: &[Digest], position: usize) -> Digest {
    let len = 2 * leaves.len() - 1;
    let first_leaf = leaves.len() - 1;
    assert!(position < len);
    if position >= first_leaf {
        return leaves[position - first_leaf];
    }
    pair_hash::<H>(
        &reference_node::<H>(leaves, 2 * position + 1),
        &reference_node::<H>(leaves, 2 * position + 2),
    )
}
