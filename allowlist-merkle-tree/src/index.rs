//! Position arithmetic for the flat breadth-first layout.
//!
//! ```text
//!             0
//!         /       \
//!        1         2
//!      /   \     /   \
//!     3     4   5     6
//! ```
//!
//! Index 0 is the root and the children of `i` are `2i + 1` and `2i + 2`, so
//! left children are always odd and right children always even.

/// Left child of `index`.
pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Right child of `index`.
pub fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// The other child under the same parent: `i - (-1)^(i mod 2)`.
///
/// `index` must not be the root.
pub fn sibling(index: usize) -> usize {
    if index % 2 == 1 { index + 1 } else { index - 1 }
}

/// Parent of `index`: `floor((i - 1) / 2)`.
///
/// `index` must not be the root.
pub fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Number of edges between `index` and the root, i.e. the length of the
/// proof for a leaf stored at `index`.
pub fn depth(index: usize) -> usize {
    (usize::BITS - 1 - (index + 1).leading_zeros()) as usize
}

/// Number of slots in a tree holding `leaf_count` leaves: `2L - 1`.
///
/// Returns `None` for zero leaves or when the size does not fit in `usize`.
pub fn tree_len(leaf_count: usize) -> Option<usize> {
    leaf_count.checked_mul(2)?.checked_sub(1)
}

/// First leaf slot in a tree of `len` slots.
pub fn first_leaf(len: usize) -> usize {
    len / 2
}
