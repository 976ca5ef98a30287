//! Sorted-leaf binary Merkle tree for allow-list commitments.
//!
//! Values (account addresses, 32-byte identities, integers) are committed as
//! leaves `H(H(abi_encode(value)))`. Leaves are sorted by digest and laid out
//! in a flat level-order array of `2L - 1` nodes, root at index 0 and
//! children of `i` at `2i + 1` and `2i + 2`. Every internal node is
//!
//! `H(min(left, right) || max(left, right))`
//!
//! so a proof is just the list of sibling digests from the leaf to the root,
//! and the root only depends on the set of committed values.
//!
//! # Core types
//!
//! - [`MerkleTree`] — build once, then query root, indices and proofs.
//! - [`InclusionProof`] — sibling path, verification, bincode encoding.
//! - [`Allowlist`] — holder for the current tree, rebuilt wholesale.
//! - [`TreeDump`] — JSON interchange form (requires `serde` feature).
//!
//! # Hashers
//!
//! [`Keccak256`] is the default and matches EVM verifiers. [`Blake3`]
//! (requires `blake3` feature) is available for Rust-only deployments.

#![warn(missing_docs)]

mod allowlist;
#[cfg(feature = "serde")]
mod dump;
mod error;
pub mod hash;
pub mod index;
pub mod leaf;
mod proof;
mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use allowlist::Allowlist;
#[cfg(feature = "serde")]
pub use dump::{DumpEntry, TreeDump};
pub use error::AllowlistTreeError;
#[cfg(feature = "blake3")]
pub use hash::Blake3;
pub use hash::{Digest, Keccak256, MerkleHasher, digest_from_hex, digest_to_hex, pair_hash};
pub use leaf::{Address, Bytes32, Leaf, LeafValue, leaf_digest};
pub use proof::InclusionProof;
pub use tree::{BuildOptions, DuplicatePolicy, MerkleTree};
pub use verify::{compute_root, verify_value};
