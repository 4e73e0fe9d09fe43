//! Incremental Merkle Tree for commitment storage
//!
//! Append-only tree of fixed depth that keeps only the filled_subtrees
//! frontier: one cached left node per level. Nothing but `insert` writes
//! `root`.
//!
//! # Hash Function
//! Internal nodes are `Keccak256(left || right)` (see crypto/hash.rs).
//! Empty subtrees use the fixed [`ZERO_HASHES`] table so independent
//! implementations reproduce byte-identical roots.

use anchor_lang::prelude::*;

use crate::crypto::hash_two_to_one;
use crate::error::PoolError;

/// Tree depth (2^8 = 256 leaves)
pub const TREE_DEPTH: usize = 8;

/// Number of leaves a full tree holds
pub const MAX_LEAVES: u16 = 1 << TREE_DEPTH;

/// Root of a subtree containing only empty leaves, per level.
///
/// zeros[0] = empty leaf (all zeros)
/// zeros[i] = hash(zeros[i-1], zeros[i-1])
/// zeros[TREE_DEPTH] = root of the empty tree
pub const ZERO_HASHES: [[u8; 32]; TREE_DEPTH + 1] = [
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    [
        0xad, 0x32, 0x28, 0xb6, 0x76, 0xf7, 0xd3, 0xcd, 0x42, 0x84, 0xa5, 0x44, 0x3f, 0x17, 0xf1,
        0x96, 0x2b, 0x36, 0xe4, 0x91, 0xb3, 0x0a, 0x40, 0xb2, 0x40, 0x58, 0x49, 0xe5, 0x97, 0xba,
        0x5f, 0xb5,
    ],
    [
        0xb4, 0xc1, 0x19, 0x51, 0x95, 0x7c, 0x6f, 0x8f, 0x64, 0x2c, 0x4a, 0xf6, 0x1c, 0xd6, 0xb2,
        0x46, 0x40, 0xfe, 0xc6, 0xdc, 0x7f, 0xc6, 0x07, 0xee, 0x82, 0x06, 0xa9, 0x9e, 0x92, 0x41,
        0x0d, 0x30,
    ],
    [
        0x21, 0xdd, 0xb9, 0xa3, 0x56, 0x81, 0x5c, 0x3f, 0xac, 0x10, 0x26, 0xb6, 0xde, 0xc5, 0xdf,
        0x31, 0x24, 0xaf, 0xba, 0xdb, 0x48, 0x5c, 0x9b, 0xa5, 0xa3, 0xe3, 0x39, 0x8a, 0x04, 0xb7,
        0xba, 0x85,
    ],
    [
        0xe5, 0x87, 0x69, 0xb3, 0x2a, 0x1b, 0xea, 0xf1, 0xea, 0x27, 0x37, 0x5a, 0x44, 0x09, 0x5a,
        0x0d, 0x1f, 0xb6, 0x64, 0xce, 0x2d, 0xd3, 0x58, 0xe7, 0xfc, 0xbf, 0xb7, 0x8c, 0x26, 0xa1,
        0x93, 0x44,
    ],
    [
        0x0e, 0xb0, 0x1e, 0xbf, 0xc9, 0xed, 0x27, 0x50, 0x0c, 0xd4, 0xdf, 0xc9, 0x79, 0x27, 0x2d,
        0x1f, 0x09, 0x13, 0xcc, 0x9f, 0x66, 0x54, 0x0d, 0x7e, 0x80, 0x05, 0x81, 0x11, 0x09, 0xe1,
        0xcf, 0x2d,
    ],
    [
        0x88, 0x7c, 0x22, 0xbd, 0x87, 0x50, 0xd3, 0x40, 0x16, 0xac, 0x3c, 0x66, 0xb5, 0xff, 0x10,
        0x2d, 0xac, 0xdd, 0x73, 0xf6, 0xb0, 0x14, 0xe7, 0x10, 0xb5, 0x1e, 0x80, 0x22, 0xaf, 0x9a,
        0x19, 0x68,
    ],
    [
        0xff, 0xd7, 0x01, 0x57, 0xe4, 0x80, 0x63, 0xfc, 0x33, 0xc9, 0x7a, 0x05, 0x0f, 0x7f, 0x64,
        0x02, 0x33, 0xbf, 0x64, 0x6c, 0xc9, 0x8d, 0x95, 0x24, 0xc6, 0xb9, 0x2b, 0xcf, 0x3a, 0xb5,
        0x6f, 0x83,
    ],
    [
        0x98, 0x67, 0xcc, 0x5f, 0x7f, 0x19, 0x6b, 0x93, 0xba, 0xe1, 0xe2, 0x7e, 0x63, 0x20, 0x74,
        0x24, 0x45, 0xd2, 0x90, 0xf2, 0x26, 0x38, 0x27, 0x49, 0x8b, 0x54, 0xfe, 0xc5, 0x39, 0xf7,
        0x56, 0xaf,
    ],
];

/// Incremental Merkle tree embedded in the pool record.
///
/// Serialized as `root || filled_subtrees || next_index` (32 + 256 + 2 bytes).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IncrementalMerkleTree {
    /// Current root hash (all zeros until the first insertion)
    pub root: [u8; 32],

    /// Rightmost left-child hash seen at each level
    pub filled_subtrees: [[u8; 32]; TREE_DEPTH],

    /// Next leaf index to be filled (also = total leaves inserted)
    pub next_index: u16,
}

impl IncrementalMerkleTree {
    /// Serialized size in bytes
    pub const LEN: usize = 32            // root
        + 32 * TREE_DEPTH                // filled_subtrees
        + 2;                             // next_index

    /// Empty tree: zero root, no cached subtrees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new commitment leaf into the tree.
    ///
    /// # Returns
    /// The leaf index where the commitment was inserted
    ///
    /// # Errors
    /// * `TreeFull` if all `MAX_LEAVES` slots are taken; the tree is left
    ///   untouched.
    pub fn insert(&mut self, leaf: [u8; 32]) -> Result<u16> {
        require!(!self.is_full(), PoolError::TreeFull);

        let leaf_index = self.next_index;
        let mut current_hash = leaf;
        let mut current_index = leaf_index;

        for (level, zero) in ZERO_HASHES.iter().take(TREE_DEPTH).enumerate() {
            let is_right_child = (current_index & 1) == 1;
            current_index >>= 1;

            if is_right_child {
                // Right child: hash with left sibling from filled_subtrees
                current_hash = hash_two_to_one(&self.filled_subtrees[level], &current_hash);
            } else {
                // Left child: cache for the future right sibling, pair with empty subtree
                self.filled_subtrees[level] = current_hash;
                current_hash = hash_two_to_one(&current_hash, zero);
            }
        }

        self.root = current_hash;
        self.next_index = self
            .next_index
            .checked_add(1)
            .ok_or(error!(PoolError::ArithmeticOverflow))?;

        Ok(leaf_index)
    }

    /// Get the current Merkle root.
    pub fn root(&self) -> [u8; 32] {
        self.root
    }

    /// Get the next leaf index.
    pub fn next_index(&self) -> u16 {
        self.next_index
    }

    /// Number of leaves inserted so far.
    pub fn len(&self) -> usize {
        self.next_index as usize
    }

    pub fn is_empty(&self) -> bool {
        self.next_index == 0
    }

    /// Get tree capacity.
    pub fn capacity(&self) -> u16 {
        MAX_LEAVES
    }

    /// Check if tree is full.
    pub fn is_full(&self) -> bool {
        self.next_index >= MAX_LEAVES
    }

    /// Root of the depth-`TREE_DEPTH` tree with no leaves.
    pub fn empty_root() -> [u8; 32] {
        ZERO_HASHES[TREE_DEPTH]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::assert_pool_err;

    /// Fold a full leaf layer up to the root, padding with empty leaves.
    fn naive_root(leaves: &[[u8; 32]]) -> [u8; 32] {
        let mut layer = vec![[0u8; 32]; MAX_LEAVES as usize];
        layer[..leaves.len()].copy_from_slice(leaves);

        while layer.len() > 1 {
            layer = layer
                .chunks(2)
                .map(|pair| hash_two_to_one(&pair[0], &pair[1]))
                .collect();
        }
        layer[0]
    }

    #[test]
    fn test_zero_hashes_match_recomputation() {
        let mut expected = [[0u8; 32]; TREE_DEPTH + 1];
        for level in 1..=TREE_DEPTH {
            expected[level] = hash_two_to_one(&expected[level - 1], &expected[level - 1]);
        }
        assert_eq!(ZERO_HASHES, expected);
    }

    #[test]
    fn test_empty_root_matches_naive_fold() {
        assert_eq!(IncrementalMerkleTree::empty_root(), naive_root(&[]));
    }

    #[test]
    fn test_new_tree_has_zero_root() {
        let tree = IncrementalMerkleTree::new();
        assert_eq!(tree.root(), [0u8; 32]);
        assert_eq!(tree.next_index(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.capacity(), 256);
    }

    #[test]
    fn test_single_leaf_root_uses_empty_siblings() {
        let leaf = [0x42u8; 32];
        let mut tree = IncrementalMerkleTree::new();
        assert_eq!(tree.insert(leaf).unwrap(), 0);

        let mut expected = leaf;
        for zero in ZERO_HASHES.iter().take(TREE_DEPTH) {
            expected = hash_two_to_one(&expected, zero);
        }
        assert_eq!(tree.root(), expected);
        assert_eq!(tree.next_index(), 1);
    }

    #[test]
    fn test_incremental_root_matches_naive_fold() {
        let leaves: Vec<[u8; 32]> = (1..=13u8).map(|i| [i; 32]).collect();
        let mut tree = IncrementalMerkleTree::new();

        for (i, leaf) in leaves.iter().enumerate() {
            assert_eq!(tree.insert(*leaf).unwrap() as usize, i);
            assert_eq!(tree.root(), naive_root(&leaves[..=i]));
        }
    }

    #[test]
    fn test_leaf_order_matters() {
        let mut a = IncrementalMerkleTree::new();
        a.insert([1u8; 32]).unwrap();
        a.insert([2u8; 32]).unwrap();

        let mut b = IncrementalMerkleTree::new();
        b.insert([2u8; 32]).unwrap();
        b.insert([1u8; 32]).unwrap();

        assert_ne!(a.root(), b.root());
    }

    #[test]
    fn test_full_tree_rejects_insert_unchanged() {
        let mut tree = IncrementalMerkleTree::new();
        for i in 0..MAX_LEAVES {
            let mut leaf = [0u8; 32];
            leaf[..2].copy_from_slice(&(i + 1).to_le_bytes());
            tree.insert(leaf).unwrap();
        }
        assert!(tree.is_full());

        let before = tree;
        assert_pool_err(tree.insert([0xEEu8; 32]), PoolError::TreeFull);
        assert_eq!(tree, before);
        assert_eq!(tree.next_index(), MAX_LEAVES);
    }

    #[test]
    fn test_serialized_len() {
        let tree = IncrementalMerkleTree::new();
        let mut bytes = Vec::new();
        tree.serialize(&mut bytes).unwrap();
        assert_eq!(bytes.len(), IncrementalMerkleTree::LEN);
    }
}
