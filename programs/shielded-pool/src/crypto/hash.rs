//! Merkle node hashing
//!
//! Internal tree nodes use Keccak256, which is available as a Solana
//! syscall. Leaves are opaque commitments computed by the depositor
//! (see `commitment.rs`); the tree never hashes a leaf on its own.

use solana_program::keccak;

/// Hash two 32-byte values for Merkle tree internal nodes.
///
/// Returns `Keccak256(left || right)`.
pub fn hash_two_to_one(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    keccak::hashv(&[left.as_ref(), right.as_ref()]).to_bytes()
}

/// Check if a 32-byte value is all zeros.
#[inline]
pub fn is_zero_hash(hash: &[u8; 32]) -> bool {
    hash.iter().all(|&b| b == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_two_to_one_deterministic() {
        let left = [1u8; 32];
        let right = [2u8; 32];
        assert_eq!(hash_two_to_one(&left, &right), hash_two_to_one(&left, &right));
    }

    #[test]
    fn test_hash_two_to_one_non_commutative() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        assert_ne!(hash_two_to_one(&a, &b), hash_two_to_one(&b, &a));
    }

    #[test]
    fn test_hash_matches_concatenated_keccak() {
        let left = [0xAAu8; 32];
        let right = [0xBBu8; 32];
        let mut combined = [0u8; 64];
        combined[..32].copy_from_slice(&left);
        combined[32..].copy_from_slice(&right);
        assert_eq!(hash_two_to_one(&left, &right), keccak::hash(&combined).to_bytes());
    }

    #[test]
    fn test_zero_pair_matches_known_vector() {
        // keccak256 of 64 zero bytes
        let expected = [
            0xad, 0x32, 0x28, 0xb6, 0x76, 0xf7, 0xd3, 0xcd, 0x42, 0x84, 0xa5, 0x44, 0x3f, 0x17,
            0xf1, 0x96, 0x2b, 0x36, 0xe4, 0x91, 0xb3, 0x0a, 0x40, 0xb2, 0x40, 0x58, 0x49, 0xe5,
            0x97, 0xba, 0x5f, 0xb5,
        ];
        assert_eq!(hash_two_to_one(&[0u8; 32], &[0u8; 32]), expected);
    }

    #[test]
    fn test_is_zero_hash() {
        assert!(is_zero_hash(&[0u8; 32]));
        assert!(!is_zero_hash(&[1u8; 32]));

        let mut partial = [0u8; 32];
        partial[31] = 1;
        assert!(!is_zero_hash(&partial));
    }
}
