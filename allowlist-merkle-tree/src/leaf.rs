//! Leaf values and their digests.
//!
//! A value is committed through its canonical single-field ABI encoding, a
//! single 32-byte word, and the leaf digest is `H(H(word))`. Hashing twice
//! keeps a 64-byte internal-node preimage from ever being accepted as a leaf.

use std::{fmt, hash::Hash, str::FromStr};

use crate::{
    AllowlistTreeError,
    hash::{Digest, MerkleHasher, strip_hex_prefix},
};

/// A value that can be committed as a tree leaf.
pub trait LeafValue: Clone + Eq + Hash + fmt::Display {
    /// Canonical single-field encoding, as an ABI encoder produces it.
    fn encode_leaf(&self) -> [u8; 32];

    /// Parse the textual form produced by `Display`.
    fn parse_value(text: &str) -> Result<Self, AllowlistTreeError>;
}

/// Compute the leaf digest of `value`: `H(H(encode(value)))`.
pub fn leaf_digest<V: LeafValue, H: MerkleHasher>(value: &V) -> Digest {
    let encoded = value.encode_leaf();
    H::hash(&H::hash(&encoded))
}

/// A value paired with its leaf digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<V> {
    value: V,
    digest: Digest,
}

impl<V: LeafValue> Leaf<V> {
    /// Hash `value` into a leaf.
    pub fn new<H: MerkleHasher>(value: V) -> Self {
        let digest = leaf_digest::<V, H>(&value);
        Self { value, digest }
    }
}

impl<V> Leaf<V> {
    /// The committed value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The leaf digest.
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub(crate) fn into_value(self) -> V {
        self.value
    }
}

/// A 20-byte account address, ABI-encoded as `address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AllowlistTreeError;

    /// Accepts 40 hex characters with or without a `0x` prefix, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = strip_hex_prefix(s.trim());
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(stripped, &mut bytes)
            .map_err(|e| AllowlistTreeError::InvalidValue(format!("bad address {:?}: {}", s, e)))?;
        Ok(Self(bytes))
    }
}

impl LeafValue for Address {
    fn encode_leaf(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }

    fn parse_value(text: &str) -> Result<Self, AllowlistTreeError> {
        text.parse()
    }
}

/// An opaque 32-byte identity, ABI-encoded as `bytes32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bytes32(pub [u8; 32]);

impl From<[u8; 32]> for Bytes32 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl LeafValue for Bytes32 {
    fn encode_leaf(&self) -> [u8; 32] {
        self.0
    }

    fn parse_value(text: &str) -> Result<Self, AllowlistTreeError> {
        let stripped = strip_hex_prefix(text.trim());
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(stripped, &mut bytes).map_err(|e| {
            AllowlistTreeError::InvalidValue(format!("bad bytes32 {:?}: {}", text, e))
        })?;
        Ok(Self(bytes))
    }
}

/// Unsigned integers are ABI-encoded as a big-endian `uint256` word.
impl LeafValue for u64 {
    fn encode_leaf(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&self.to_be_bytes());
        word
    }

    fn parse_value(text: &str) -> Result<Self, AllowlistTreeError> {
        text.trim()
            .parse()
            .map_err(|e| AllowlistTreeError::InvalidValue(format!("bad uint {:?}: {}", text, e)))
    }
}
