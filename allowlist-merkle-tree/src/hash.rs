//! Digest primitives: the hasher abstraction, canonical pair hashing and hex
//! rendering.
//!
//! Internal nodes use `H(min(a, b) || max(a, b))`, where `min`/`max` are
//! taken over the unsigned lexicographic order of the two 32-byte child
//! digests. Because the pair is ordered before hashing, a verifier only needs
//! the unordered sibling set on the path to the root.

use std::cmp::Ordering;

use tiny_keccak::{Hasher, Keccak};

use crate::AllowlistTreeError;

/// A 32-byte node digest.
pub type Digest = [u8; 32];

/// Black-box digest primitive: hash arbitrary bytes to 32 bytes.
pub trait MerkleHasher:
    std::fmt::Debug + Clone + Copy + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// Short name used in logs and the CLI.
    const NAME: &'static str;

    /// Hash `data` into a digest.
    fn hash(data: &[u8]) -> Digest;
}

/// Keccak-256, the hash used by EVM verifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256;

impl MerkleHasher for Keccak256 {
    const NAME: &'static str = "keccak256";

    fn hash(data: &[u8]) -> Digest {
        let mut output = [0u8; 32];
        let mut hasher = Keccak::v256();
        hasher.update(data);
        hasher.finalize(&mut output);
        output
    }
}

/// Blake3, for commitments that never leave Rust-side verifiers.
#[cfg(feature = "blake3")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blake3;

#[cfg(feature = "blake3")]
impl MerkleHasher for Blake3 {
    const NAME: &'static str = "blake3";

    fn hash(data: &[u8]) -> Digest {
        *blake3::hash(data).as_bytes()
    }
}

/// Total order over digests: unsigned byte-wise lexicographic comparison.
///
/// Both inputs are always 32 bytes, so the length tie-break never applies.
pub fn compare_digests(a: &Digest, b: &Digest) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        if x != y {
            return x.cmp(y);
        }
    }
    a.len().cmp(&b.len())
}

/// Hash two child digests into their parent: `H(lo || hi)`.
///
/// Symmetric: `pair_hash(a, b) == pair_hash(b, a)`.
pub fn pair_hash<H: MerkleHasher>(a: &Digest, b: &Digest) -> Digest {
    let (lo, hi) = match compare_digests(a, b) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    };
    let mut input = [0u8; 64];
    input[..32].copy_from_slice(lo);
    input[32..].copy_from_slice(hi);
    H::hash(&input)
}

/// Render a digest as `0x` followed by lowercase hex.
pub fn digest_to_hex(digest: &Digest) -> String {
    format!("0x{}", hex::encode(digest))
}

/// Parse a `0x`-prefixed (or bare) 64-character hex string into a digest.
pub fn digest_from_hex(text: &str) -> Result<Digest, AllowlistTreeError> {
    let stripped = strip_hex_prefix(text.trim());
    let mut digest = [0u8; 32];
    hex::decode_to_slice(stripped, &mut digest).map_err(|e| {
        AllowlistTreeError::InvalidValue(format!("bad digest {:?}: {}", text, e))
    })?;
    Ok(digest)
}

pub(crate) fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}
