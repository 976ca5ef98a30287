use tracing::debug;

use crate::{
    AllowlistTreeError, BuildOptions,
    hash::{Digest, Keccak256, MerkleHasher},
    leaf::LeafValue,
    proof::InclusionProof,
    tree::MerkleTree,
};

/// Holder for the current allow-list commitment.
///
/// Starts empty; queries fail with [`AllowlistTreeError::NotBuilt`] until
/// the first successful [`rebuild`](Self::rebuild). A rebuild replaces the
/// whole tree and needs `&mut self`, so it can never overlap with readers.
#[derive(Debug, Clone)]
pub struct Allowlist<V, H = Keccak256> {
    options: BuildOptions,
    tree: Option<MerkleTree<V, H>>,
}

impl<V, H> Default for Allowlist<V, H> {
    fn default() -> Self {
        Self {
            options: BuildOptions::default(),
            tree: None,
        }
    }
}

impl<V: LeafValue, H: MerkleHasher> Allowlist<V, H> {
    /// Create an empty holder with default build options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty holder that builds with `options`.
    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            tree: None,
        }
    }

    /// Build a tree over `values` and make it current.
    ///
    /// On error the previously built tree, if any, stays in place.
    pub fn rebuild<I>(&mut self, values: I) -> Result<&MerkleTree<V, H>, AllowlistTreeError>
    where
        I: IntoIterator<Item = V>,
    {
        let tree = MerkleTree::build_with(values, self.options)?;
        if let Some(previous) = &self.tree {
            debug!(
                previous_leaves = previous.leaf_count(),
                leaves = tree.leaf_count(),
                "replacing allowlist tree"
            );
        }
        Ok(self.tree.insert(tree))
    }

    /// Install an already built tree.
    pub fn replace(&mut self, tree: MerkleTree<V, H>) -> Option<MerkleTree<V, H>> {
        self.tree.replace(tree)
    }

    /// Drop the current tree.
    pub fn reset(&mut self) -> Option<MerkleTree<V, H>> {
        self.tree.take()
    }

    /// The current tree.
    pub fn tree(&self) -> Result<&MerkleTree<V, H>, AllowlistTreeError> {
        self.tree.as_ref().ok_or(AllowlistTreeError::NotBuilt)
    }

    /// Whether a tree has been built.
    pub fn is_built(&self) -> bool {
        self.tree.is_some()
    }

    /// Root of the current tree.
    pub fn root(&self) -> Result<Digest, AllowlistTreeError> {
        Ok(self.tree()?.root())
    }

    /// Root of the current tree as `0x`-hex.
    pub fn root_hex(&self) -> Result<String, AllowlistTreeError> {
        Ok(self.tree()?.root_hex())
    }

    /// Inclusion proof for `value` in the current tree.
    pub fn proof(&self, value: &V) -> Result<InclusionProof, AllowlistTreeError> {
        self.tree()?.proof(value)
    }

    /// Leaf position of `value` in the current tree.
    pub fn index_of(&self, value: &V) -> Result<usize, AllowlistTreeError> {
        self.tree()?.index_of(value)
    }
}
