//! Commitment and nullifier hashing (client side)
//!
//! Depositors build their leaf off-chain and only ever submit the result:
//! ```text
//! commitment     = Poseidon(nullifier, secret)
//! nullifier_hash = Poseidon(nullifier)
//! ```
//! Parameters are circomlib-compatible Poseidon over the BN254 scalar field,
//! so the values match what the withdrawal circuit recomputes. No
//! instruction calls into this module.

use anchor_lang::prelude::*;
use ark_bn254::Fr;
use light_poseidon::{Poseidon, PoseidonBytesHasher};

use crate::error::PoolError;

/// Compute the leaf commitment for a deposit.
///
/// Both inputs must be canonical BN254 scalars (big-endian, `< r`).
pub fn compute_commitment(nullifier: &[u8; 32], secret: &[u8; 32]) -> Result<[u8; 32]> {
    let mut poseidon =
        Poseidon::<Fr>::new_circom(2).map_err(|_| error!(PoolError::InvalidCommitment))?;
    poseidon
        .hash_bytes_be(&[nullifier.as_ref(), secret.as_ref()])
        .map_err(|_| error!(PoolError::InvalidCommitment))
}

/// Compute the nullifier hash revealed at withdrawal time.
pub fn compute_nullifier_hash(nullifier: &[u8; 32]) -> Result<[u8; 32]> {
    let mut poseidon =
        Poseidon::<Fr>::new_circom(1).map_err(|_| error!(PoolError::InvalidNullifier))?;
    poseidon
        .hash_bytes_be(&[nullifier.as_ref()])
        .map_err(|_| error!(PoolError::InvalidNullifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::field::{is_canonical_scalar, u64_to_scalar, BN254_SCALAR_MODULUS_BE};

    #[test]
    fn test_commitment_deterministic() {
        let nullifier = u64_to_scalar(1);
        let secret = u64_to_scalar(2);
        assert_eq!(
            compute_commitment(&nullifier, &secret).unwrap(),
            compute_commitment(&nullifier, &secret).unwrap()
        );
    }

    #[test]
    fn test_commitment_binds_both_inputs() {
        let a = u64_to_scalar(1);
        let b = u64_to_scalar(2);
        let c = u64_to_scalar(3);

        let base = compute_commitment(&a, &b).unwrap();
        assert_ne!(base, compute_commitment(&a, &c).unwrap());
        assert_ne!(base, compute_commitment(&c, &b).unwrap());
        assert_ne!(base, compute_commitment(&b, &a).unwrap());
    }

    #[test]
    fn test_nullifier_hash_differs_from_commitment() {
        let nullifier = u64_to_scalar(7);
        let secret = u64_to_scalar(8);

        let commitment = compute_commitment(&nullifier, &secret).unwrap();
        let nullifier_hash = compute_nullifier_hash(&nullifier).unwrap();
        assert_ne!(commitment, nullifier_hash);
        assert!(is_canonical_scalar(&nullifier_hash));
    }

    #[test]
    fn test_out_of_field_input_rejected() {
        let secret = u64_to_scalar(2);
        assert!(compute_commitment(&BN254_SCALAR_MODULUS_BE, &secret).is_err());
    }
}
