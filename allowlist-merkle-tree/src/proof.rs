//! Inclusion proofs.
//!
//! An `InclusionProof` carries a leaf digest and the sibling digests on the
//! path from that leaf to the root, innermost first. Internal nodes hash
//! their children in canonical order, so no left/right flags are needed.

use bincode::{Decode, Encode};

use crate::{
    AllowlistTreeError,
    hash::{Digest, digest_to_hex},
};

/// Upper bound on path length accepted when decoding. A tree of `2^64`
/// leaves is 64 levels deep.
pub(crate) const MAX_PROOF_SIBLINGS: usize = 64;

/// Proof that a leaf is part of a tree with a given root.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct InclusionProof {
    pub(crate) leaf: Digest,
    pub(crate) siblings: Vec<Digest>,
}

impl InclusionProof {
    /// Create a proof from a leaf digest and its sibling path.
    pub fn new(leaf: Digest, siblings: Vec<Digest>) -> Self {
        Self { leaf, siblings }
    }

    /// The proved leaf digest.
    pub fn leaf(&self) -> &Digest {
        &self.leaf
    }

    /// Sibling digests, innermost first.
    pub fn siblings(&self) -> &[Digest] {
        &self.siblings
    }

    /// Number of siblings (the depth of the leaf).
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// True for the proof of a single-leaf tree, where the leaf is the root.
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Siblings as `0x`-hex strings, innermost first.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.siblings.iter().map(digest_to_hex).collect()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, AllowlistTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| AllowlistTreeError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Rejects trailing bytes and paths longer than any tree can produce.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, AllowlistTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 1024 * 1024 }>();
        let (proof, read): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| AllowlistTreeError::InvalidProof(format!("decode error: {}", e)))?;
        if read != bytes.len() {
            return Err(AllowlistTreeError::InvalidProof(format!(
                "{} trailing bytes after proof",
                bytes.len() - read
            )));
        }
        if proof.siblings.len() > MAX_PROOF_SIBLINGS {
            return Err(AllowlistTreeError::InvalidProof(format!(
                "proof has {} siblings (max {})",
                proof.siblings.len(),
                MAX_PROOF_SIBLINGS
            )));
        }
        Ok(proof)
    }
}
