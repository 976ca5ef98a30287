use std::marker::PhantomData;

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    AllowlistTreeError,
    hash::{Digest, Keccak256, MerkleHasher, compare_digests, digest_to_hex, pair_hash},
    index::{depth, first_leaf, left_child, parent, right_child, sibling, tree_len},
    leaf::{Leaf, LeafValue, leaf_digest},
    proof::InclusionProof,
};

/// How [`MerkleTree::build_with`] treats a value that occurs more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail with [`AllowlistTreeError::DuplicateValue`].
    #[default]
    Reject,
    /// Give every occurrence its own leaf; lookups resolve to the slot
    /// recorded last. Reproduces roots committed by earlier tooling that did
    /// not deduplicate its input.
    LastWriteWins,
}

/// Build-time options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Treatment of repeated values.
    pub duplicates: DuplicatePolicy,
}

/// A binary Merkle tree over a fixed set of values.
///
/// Nodes are stored level-order (BFS) in a flat vector of `2L - 1` digests:
/// root=0, left child=2i+1, right child=2i+2. Leaves occupy the last `L`
/// slots in ascending digest order, so the tree depends only on the value
/// set and not on the order the values were supplied in.
///
/// The tree is immutable; to change the committed set, build a new one.
#[derive(Debug, Clone)]
pub struct MerkleTree<V, H = Keccak256> {
    nodes: Vec<Digest>,
    indices: IndexMap<V, usize>,
    _hasher: PhantomData<H>,
}

impl<V: LeafValue, H: MerkleHasher> MerkleTree<V, H> {
    /// Build a tree from `values`, rejecting duplicates.
    pub fn build<I>(values: I) -> Result<Self, AllowlistTreeError>
    where
        I: IntoIterator<Item = V>,
    {
        Self::build_with(values, BuildOptions::default())
    }

    /// Build a tree from `values` with explicit options.
    pub fn build_with<I>(values: I, options: BuildOptions) -> Result<Self, AllowlistTreeError>
    where
        I: IntoIterator<Item = V>,
    {
        // Map order follows first appearance; slots are filled in below.
        let mut indices: IndexMap<V, usize> = IndexMap::new();
        let mut leaves: Vec<Leaf<V>> = Vec::new();
        for value in values {
            if indices.insert(value.clone(), 0).is_some()
                && options.duplicates == DuplicatePolicy::Reject
            {
                return Err(AllowlistTreeError::DuplicateValue(value.to_string()));
            }
            leaves.push(Leaf::new::<H>(value));
        }

        let len = tree_len(leaves.len()).ok_or(AllowlistTreeError::EmptyInput)?;

        // Stable, so equal digests keep their input order.
        leaves.sort_by(|a, b| compare_digests(a.digest(), b.digest()));

        let first_leaf = first_leaf(len);
        let mut nodes = vec![[0u8; 32]; len];
        for (offset, leaf) in leaves.iter().enumerate() {
            nodes[first_leaf + offset] = *leaf.digest();
        }
        for position in (0..first_leaf).rev() {
            nodes[position] =
                pair_hash::<H>(&nodes[left_child(position)], &nodes[right_child(position)]);
        }

        let leaf_count = leaves.len();
        for (offset, leaf) in leaves.into_iter().enumerate() {
            indices.insert(leaf.into_value(), first_leaf + offset);
        }

        debug!(
            leaf_count,
            distinct = indices.len(),
            hasher = H::NAME,
            root = %digest_to_hex(&nodes[0]),
            "built allowlist tree"
        );

        Ok(Self {
            nodes,
            indices,
            _hasher: PhantomData,
        })
    }

    /// Leaf digest of `value` under this tree's hasher.
    pub fn leaf_digest(value: &V) -> Digest {
        leaf_digest::<V, H>(value)
    }

    /// Position of `value`'s leaf in the flat node array.
    pub fn index_of(&self, value: &V) -> Result<usize, AllowlistTreeError> {
        self.indices
            .get(value)
            .copied()
            .ok_or_else(|| AllowlistTreeError::UnknownValue(value.to_string()))
    }

    /// Whether `value` was committed.
    pub fn contains(&self, value: &V) -> bool {
        self.indices.contains_key(value)
    }

    /// Sibling path from `value`'s leaf up to the root, innermost first.
    pub fn proof(&self, value: &V) -> Result<InclusionProof, AllowlistTreeError> {
        let mut position = self.index_of(value)?;
        let leaf = self.nodes[position];
        let mut siblings = Vec::with_capacity(depth(position));
        while position > 0 {
            siblings.push(self.nodes[sibling(position)]);
            position = parent(position);
        }
        Ok(InclusionProof::new(leaf, siblings))
    }

    /// [`proof`](Self::proof) rendered as `0x`-hex strings.
    pub fn proof_hex(&self, value: &V) -> Result<Vec<String>, AllowlistTreeError> {
        Ok(self.proof(value)?.to_hex_strings())
    }
}

impl<V, H> MerkleTree<V, H> {
    /// Assemble a tree from already validated parts.
    pub(crate) fn from_parts(nodes: Vec<Digest>, indices: IndexMap<V, usize>) -> Self {
        Self {
            nodes,
            indices,
            _hasher: PhantomData,
        }
    }

    /// The root digest.
    pub fn root(&self) -> Digest {
        self.nodes[0]
    }

    /// The root as `0x`-prefixed lowercase hex.
    pub fn root_hex(&self) -> String {
        digest_to_hex(&self.root())
    }

    /// All node digests, root first.
    pub fn nodes(&self) -> &[Digest] {
        &self.nodes
    }

    /// Total number of nodes (`2L - 1`).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf slots, counting repeated values separately.
    pub fn leaf_count(&self) -> usize {
        self.nodes.len() - first_leaf(self.nodes.len())
    }

    /// Leaf digests in ascending order.
    pub fn leaves(&self) -> &[Digest] {
        &self.nodes[first_leaf(self.nodes.len())..]
    }

    /// Committed values with their leaf positions, in first-appearance order.
    pub fn values(&self) -> impl Iterator<Item = (&V, usize)> {
        self.indices.iter().map(|(value, index)| (value, *index))
    }
}
