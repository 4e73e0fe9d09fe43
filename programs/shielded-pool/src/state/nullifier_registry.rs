//! Spent nullifier tracking in a fixed buffer
//!
//! The pool record carries a 512-byte region holding up to
//! [`NULLIFIER_CAPACITY`] spent nullifiers. Entries are appended in spend
//! order and never removed.
//!
//! # Storage Pattern
//! - No stored count: the active entries are the non-zero prefix of
//!   `used_nullifiers`, so the all-zero value is reserved as the empty marker
//! - O(n) lookup by linear scan of the active prefix
//! - Fixed capacity: once full, every further spend fails with
//!   `RegistryFull`

use anchor_lang::prelude::*;

use crate::crypto::is_zero_hash;
use crate::error::PoolError;

/// Number of 32-byte nullifier slots (512-byte region)
pub const NULLIFIER_CAPACITY: usize = 16;

/// Bounded set of spent nullifiers.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullifierRegistry {
    pub used_nullifiers: [[u8; 32]; NULLIFIER_CAPACITY],
}

impl NullifierRegistry {
    /// Serialized size in bytes
    pub const LEN: usize = 32 * NULLIFIER_CAPACITY;

    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded nullifiers.
    pub fn len(&self) -> usize {
        self.used_nullifiers
            .iter()
            .position(is_zero_hash)
            .unwrap_or(NULLIFIER_CAPACITY)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == NULLIFIER_CAPACITY
    }

    /// Slots still available for withdrawals.
    pub fn remaining(&self) -> usize {
        NULLIFIER_CAPACITY - self.len()
    }

    /// Recorded nullifiers in spend order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8; 32]> {
        self.used_nullifiers[..self.len()].iter()
    }

    /// Check if nullifier has been spent.
    pub fn contains(&self, nullifier: &[u8; 32]) -> bool {
        self.iter().any(|spent| spent == nullifier)
    }

    /// Record a nullifier as spent.
    ///
    /// # Errors
    /// * `InvalidNullifier` for the all-zero value
    /// * `AlreadySpent` if the nullifier is already recorded
    /// * `RegistryFull` if every slot is taken
    pub fn insert(&mut self, nullifier: [u8; 32]) -> Result<()> {
        require!(!is_zero_hash(&nullifier), PoolError::InvalidNullifier);
        require!(!self.contains(&nullifier), PoolError::AlreadySpent);

        let count = self.len();
        require!(count < NULLIFIER_CAPACITY, PoolError::RegistryFull);

        self.used_nullifiers[count] = nullifier;
        Ok(())
    }
}
