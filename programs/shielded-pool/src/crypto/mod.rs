//! Cryptographic primitives for the shielded pool
//!
//! # Security Note
//! Verification is FAIL-CLOSED: unless a verifier explicitly accepts a
//! proof, the withdrawal aborts without touching pool state.

pub mod commitment;
pub mod field;
pub mod hash;
pub mod public_inputs;
pub mod verifier;

pub use hash::{hash_two_to_one, is_zero_hash};
pub use public_inputs::WithdrawPublicInputs;
pub use verifier::{
    active_verifier, AcceptAllVerifier, FailClosedVerifier, ProofVerifier, WithdrawProof,
};
