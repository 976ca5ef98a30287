//! Proof verification.
//!
//! Pure functions, no tree required. The root is recomputed by folding
//! `pair_hash(acc, sibling)` over the path, starting from the leaf digest.

use crate::{
    AllowlistTreeError,
    hash::{Digest, MerkleHasher, digest_to_hex, pair_hash},
    leaf::{LeafValue, leaf_digest},
    proof::InclusionProof,
};

/// Fold `siblings` onto `leaf` and return the resulting root.
pub fn compute_root<H: MerkleHasher>(leaf: &Digest, siblings: &[Digest]) -> Digest {
    siblings
        .iter()
        .fold(*leaf, |acc, sibling| pair_hash::<H>(&acc, sibling))
}

/// Check that `value` is committed under `expected_root` given its sibling
/// path. Hashes the value into its leaf digest first.
pub fn verify_value<V: LeafValue, H: MerkleHasher>(
    value: &V,
    siblings: &[Digest],
    expected_root: &Digest,
) -> Result<(), AllowlistTreeError> {
    let leaf = leaf_digest::<V, H>(value);
    check_root(&compute_root::<H>(&leaf, siblings), expected_root)
}

impl InclusionProof {
    /// Recompute the root this proof commits to.
    pub fn compute_root<H: MerkleHasher>(&self) -> Digest {
        compute_root::<H>(&self.leaf, &self.siblings)
    }

    /// Verify the proof against an expected root hash.
    pub fn verify<H: MerkleHasher>(&self, expected_root: &Digest) -> Result<(), AllowlistTreeError> {
        check_root(&self.compute_root::<H>(), expected_root)
    }

    /// Verify that this proof is for `value` and commits to `expected_root`.
    pub fn verify_value<V: LeafValue, H: MerkleHasher>(
        &self,
        value: &V,
        expected_root: &Digest,
    ) -> Result<(), AllowlistTreeError> {
        let leaf = leaf_digest::<V, H>(value);
        if leaf != self.leaf {
            return Err(AllowlistTreeError::InvalidProof(format!(
                "proof is for leaf {}, value {} hashes to {}",
                digest_to_hex(&self.leaf),
                value,
                digest_to_hex(&leaf)
            )));
        }
        self.verify::<H>(expected_root)
    }
}

fn check_root(computed: &Digest, expected: &Digest) -> Result<(), AllowlistTreeError> {
    if computed != expected {
        return Err(AllowlistTreeError::InvalidProof(format!(
            "root hash mismatch: expected {}, got {}",
            digest_to_hex(expected),
            digest_to_hex(computed)
        )));
    }
    Ok(())
}
