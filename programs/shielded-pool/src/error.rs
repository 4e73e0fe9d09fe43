//! Error types for the shielded pool
//!
//! Error codes are stable across versions for client compatibility.

use anchor_lang::prelude::*;

#[error_code]
pub enum PoolError {
    // ========== Accumulator / Registry ==========

    /// Every leaf slot of the commitment tree is taken
    #[msg("Merkle tree is full")]
    TreeFull, // 6000

    /// Every nullifier slot of the pool record is taken
    #[msg("Nullifier registry is full")]
    RegistryFull, // 6001

    /// Nullifier was already recorded by an earlier withdrawal
    #[msg("Nullifier already spent")]
    AlreadySpent, // 6002

    // ========== Proof ==========

    /// Verifier rejected the proof
    #[msg("Invalid proof")]
    InvalidProof, // 6003

    /// No proof verifier is available in this build
    #[msg("Proof verification unavailable - withdrawals disabled")]
    VerifierUnavailable, // 6004

    // ========== Lifecycle ==========

    /// Pool record already carries an authority
    #[msg("Pool already initialized")]
    AlreadyInitialized, // 6005

    /// Pool is paused by its authority
    #[msg("Pool is paused")]
    PoolPaused, // 6006

    /// Caller is not the pool authority
    #[msg("Unauthorized: caller is not pool authority")]
    Unauthorized, // 6007

    // ========== Funds ==========

    /// Payer or pool cannot cover the fixed denomination
    #[msg("Insufficient funds for the fixed denomination")]
    InsufficientFunds, // 6008

    /// Arithmetic overflow occurred
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow, // 6009

    // ========== Inputs ==========

    /// Commitment cannot be all zeros
    #[msg("Invalid commitment: cannot be all zeros")]
    InvalidCommitment, // 6010

    /// Nullifier is zero or not a canonical BN254 scalar
    #[msg("Invalid nullifier: zero or outside the scalar field")]
    InvalidNullifier, // 6011
}
