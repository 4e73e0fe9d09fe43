//! Public inputs for the withdrawal proof
//!
//! # Withdrawal Circuit Public Inputs (4 total)
//! 1. root - current commitment tree root
//! 2. nullifier - revealed nullifier hash (double-spend tag)
//! 3. recipient - address receiving the denomination
//! 4. denomination - fixed withdrawal amount
//!
//! # Field Element Encoding
//! All values are encoded as 32-byte big-endian elements of the BN254
//! scalar field (see `field.rs`).

use anchor_lang::prelude::*;

use super::field::{is_canonical_scalar, reduce_to_scalar, u64_to_scalar, ScalarField};
use super::hash::is_zero_hash;
use crate::error::PoolError;

/// Public inputs for withdrawal proof verification.
///
/// They must match exactly what the prover committed to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawPublicInputs {
    /// Merkle root the membership proof is made against
    pub root: [u8; 32],

    /// Nullifier hash being spent
    pub nullifier: [u8; 32],

    /// Account receiving the withdrawn lamports
    pub recipient: Pubkey,

    /// Fixed amount moved by the withdrawal
    pub denomination: u64,
}

impl WithdrawPublicInputs {
    /// Number of public inputs for verification
    pub const COUNT: usize = 4;

    pub fn new(root: [u8; 32], nullifier: [u8; 32], recipient: Pubkey, denomination: u64) -> Self {
        Self {
            root,
            nullifier,
            recipient,
            denomination,
        }
    }

    /// Validate public inputs.
    ///
    /// The nullifier must be non-zero and canonical: a value `>= r` would
    /// alias `value - r` inside the circuit while occupying a different
    /// registry slot.
    pub fn validate(&self) -> Result<()> {
        require!(
            !is_zero_hash(&self.nullifier),
            PoolError::InvalidNullifier
        );
        require!(
            is_canonical_scalar(&self.nullifier),
            PoolError::InvalidNullifier
        );
        Ok(())
    }

    /// Convert to field elements in circuit order.
    pub fn to_field_elements(&self) -> [ScalarField; Self::COUNT] {
        [
            reduce_to_scalar(&self.root),
            self.nullifier,
            reduce_to_scalar(&self.recipient.to_bytes()),
            u64_to_scalar(self.denomination),
        ]
    }
}
