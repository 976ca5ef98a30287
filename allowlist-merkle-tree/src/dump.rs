//! Persisted JSON form of a tree.
//!
//! ```json
//! {
//!   "tree": ["0x<root>", "0x..", ...],
//!   "values": [{ "value": "0x<address>", "treeIndex": 4 }, ...]
//! }
//! ```
//!
//! `tree` is the flat node array, root first. `values` lists every distinct
//! committed value in first-appearance order with the position of its leaf.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    AllowlistTreeError,
    hash::{MerkleHasher, compare_digests, digest_from_hex, digest_to_hex, pair_hash},
    index::{first_leaf, left_child, right_child},
    leaf::{LeafValue, leaf_digest},
    tree::MerkleTree,
};

/// The interchange document consumed by external verifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDump {
    /// Node digests as `0x`-hex, root first.
    pub tree: Vec<String>,
    /// Value to leaf position mapping.
    pub values: Vec<DumpEntry>,
}

/// One committed value and its leaf position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DumpEntry {
    /// Textual form of the value.
    pub value: String,
    /// Index into [`TreeDump::tree`].
    pub tree_index: usize,
}

impl TreeDump {
    /// Serialize as pretty-printed JSON (two-space indent).
    pub fn to_json_pretty(&self) -> Result<String, AllowlistTreeError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AllowlistTreeError::InvalidDump(format!("encode error: {}", e)))
    }

    /// Parse a dump from JSON text. Structure only; see
    /// [`MerkleTree::from_dump`] for content validation.
    pub fn from_json(text: &str) -> Result<Self, AllowlistTreeError> {
        serde_json::from_str(text)
            .map_err(|e| AllowlistTreeError::InvalidDump(format!("decode error: {}", e)))
    }
}

impl<V: LeafValue, H: MerkleHasher> MerkleTree<V, H> {
    /// Export the node array and index map.
    pub fn to_dump(&self) -> TreeDump {
        TreeDump {
            tree: self.nodes().iter().map(digest_to_hex).collect(),
            values: self
                .values()
                .map(|(value, tree_index)| DumpEntry {
                    value: value.to_string(),
                    tree_index,
                })
                .collect(),
        }
    }

    /// Rebuild a tree from a dump, checking every digest.
    ///
    /// Fails with [`AllowlistTreeError::NotBuilt`] for an empty node array
    /// and [`AllowlistTreeError::InvalidDump`] when the layout, hashing or
    /// index map does not hold.
    pub fn from_dump(dump: &TreeDump) -> Result<Self, AllowlistTreeError> {
        if dump.tree.is_empty() {
            return Err(AllowlistTreeError::NotBuilt);
        }
        let len = dump.tree.len();
        if len % 2 == 0 {
            return Err(AllowlistTreeError::InvalidDump(format!(
                "node count {} is not of the form 2L - 1",
                len
            )));
        }

        let nodes = dump
            .tree
            .iter()
            .map(|text| digest_from_hex(text))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AllowlistTreeError::InvalidDump(e.to_string()))?;

        let first_leaf = first_leaf(len);
        if nodes[first_leaf..]
            .windows(2)
            .any(|pair| compare_digests(&pair[0], &pair[1]).is_gt())
        {
            return Err(AllowlistTreeError::InvalidDump(
                "leaves are not in ascending order".into(),
            ));
        }
        for position in 0..first_leaf {
            let expected =
                pair_hash::<H>(&nodes[left_child(position)], &nodes[right_child(position)]);
            if nodes[position] != expected {
                return Err(AllowlistTreeError::InvalidDump(format!(
                    "node {} does not match the hash of its children",
                    position
                )));
            }
        }

        let mut indices: IndexMap<V, usize> = IndexMap::with_capacity(dump.values.len());
        for entry in &dump.values {
            let value = V::parse_value(&entry.value)
                .map_err(|e| AllowlistTreeError::InvalidDump(e.to_string()))?;
            if entry.tree_index < first_leaf || entry.tree_index >= len {
                return Err(AllowlistTreeError::InvalidDump(format!(
                    "tree index {} of {} is not a leaf slot",
                    entry.tree_index, entry.value
                )));
            }
            if nodes[entry.tree_index] != leaf_digest::<V, H>(&value) {
                return Err(AllowlistTreeError::InvalidDump(format!(
                    "leaf {} does not hash {}",
                    entry.tree_index, entry.value
                )));
            }
            if indices.insert(value, entry.tree_index).is_some() {
                return Err(AllowlistTreeError::InvalidDump(format!(
                    "value {} listed twice",
                    entry.value
                )));
            }
        }

        debug!(
            node_count = len,
            values = indices.len(),
            hasher = H::NAME,
            "loaded allowlist tree from dump"
        );

        Ok(Self::from_parts(nodes, indices))
    }
}
