//! # Position Arithmetic
//!
//! Nodes of an MMR are numbered in insertion order ("positions"). A leaf
//! at height 0 is appended at the next free position; every time it
//! completes a perfect subtree, the parent is appended right after it.
//!
//! ```text
//! height 2:          6
//!                  /   \
//! height 1:      2       5       9
//!               / \     / \     / \
//! height 0:    0   1   3   4   7   8   10
//! ```
//!
//! Seen as `pos + 1` in binary, the leftmost nodes of each height are the
//! all-ones numbers (1, 3, 7, 15, ...). Jumping left by the largest
//! perfect tree size maps any node onto the leftmost node of equal height.

/// Largest MMR size the arithmetic below handles without overflow.
pub const MAX_MMR_SIZE: u64 = 1 << 62;

// =============================================================================
// OFFSETS
// =============================================================================

/// Distance from a left child at `height` to its parent.
pub const fn parent_offset(height: u32) -> u64 {
    2 << height
}

/// Distance from a left child at `height` to its right sibling.
pub const fn sibling_offset(height: u32) -> u64 {
    (2 << height) - 1
}

// =============================================================================
// LEAF INDEX <-> POSITION
// =============================================================================

/// MMR size right after leaf `index` was appended.
pub fn leaf_index_to_mmr_size(index: u64) -> u64 {
    let leaves_count = index + 1;
    let peak_count = u64::from(leaves_count.count_ones());
    2 * leaves_count - peak_count
}

/// Position of leaf `index`.
///
/// Appending the leaf adds one node per completed subtree above it, and
/// the number of completed subtrees is the number of trailing zeros of
/// the new leaf count.
pub fn leaf_index_to_pos(index: u64) -> u64 {
    leaf_index_to_mmr_size(index) - u64::from((index + 1).trailing_zeros()) - 1
}

// =============================================================================
// HEIGHTS
// =============================================================================

fn bit_length(n: u64) -> u32 {
    64 - n.leading_zeros()
}

fn is_all_one_bits(n: u64) -> bool {
    n != 0 && n.count_zeros() == n.leading_zeros()
}

fn jump_left(pos: u64) -> u64 {
    let most_significant_bits = 1u64 << (bit_length(pos) - 1);
    pos - (most_significant_bits - 1)
}

/// Height of the node at `pos` (leaves are height 0).
///
/// Positions beyond [`MAX_MMR_SIZE`] belong to no valid MMR; for
/// `u64::MAX` the 1-based position saturates and the result is 63.
pub fn pos_height_in_tree(pos: u64) -> u32 {
    let mut pos = pos.saturating_add(1);
    while !is_all_one_bits(pos) {
        pos = jump_left(pos);
    }
    bit_length(pos) - 1
}

/// Whether `pos` is a leaf.
pub fn is_leaf(pos: u64) -> bool {
    pos_height_in_tree(pos) == 0
}

// =============================================================================
// PEAKS
// =============================================================================

fn peak_pos_by_height(height: u32) -> u64 {
    1u64.checked_shl(height + 1).map_or(u64::MAX, |size| size - 2)
}

/// Height and position of the leftmost (largest) peak.
fn left_peak_height_pos(mmr_size: u64) -> (u32, u64) {
    let mut height = 1;
    let mut prev_pos = 0;
    let mut pos = peak_pos_by_height(height);
    while pos < mmr_size {
        height += 1;
        prev_pos = pos;
        pos = peak_pos_by_height(height);
    }
    (height - 1, prev_pos)
}

/// Next peak to the right of the peak at `(height, pos)`.
fn get_right_peak(mut height: u32, mut pos: u64, mmr_size: u64) -> Option<(u32, u64)> {
    // Jump to the right sibling; while it overshoots, descend to its left child.
    pos += sibling_offset(height);
    while pos > mmr_size - 1 {
        if height == 0 {
            return None;
        }
        pos -= parent_offset(height - 1);
        height -= 1;
    }
    Some((height, pos))
}

/// Peak positions with their heights, left to right.
///
/// `mmr_size` must not exceed [`MAX_MMR_SIZE`].
pub fn get_peaks_with_heights(mmr_size: u64) -> Vec<(u32, u64)> {
    if mmr_size == 0 {
        return Vec::new();
    }

    let (mut height, mut pos) = left_peak_height_pos(mmr_size);
    let mut peaks = vec![(height, pos)];
    while height > 0 {
        match get_right_peak(height, pos, mmr_size) {
            Some((next_height, next_pos)) => {
                height = next_height;
                pos = next_pos;
                peaks.push((height, pos));
            }
            None => break,
        }
    }
    peaks
}

/// Peak positions, left to right.
pub fn get_peaks(mmr_size: u64) -> Vec<u64> {
    get_peaks_with_heights(mmr_size)
        .into_iter()
        .map(|(_, pos)| pos)
        .collect()
}

/// Whether `mmr_size` is a size some number of appends can produce.
pub fn is_valid_mmr_size(mmr_size: u64) -> bool {
    if mmr_size == 0 {
        return true;
    }
    if mmr_size > MAX_MMR_SIZE {
        return false;
    }
    match mmr_size_to_leaf_count(mmr_size) {
        0 => false,
        leaves => leaf_index_to_mmr_size(leaves - 1) == mmr_size,
    }
}

/// Number of leaves in an MMR of a valid size.
pub fn mmr_size_to_leaf_count(mmr_size: u64) -> u64 {
    get_peaks_with_heights(mmr_size)
        .into_iter()
        .map(|(height, _)| 1u64 << height)
        .sum()
}
