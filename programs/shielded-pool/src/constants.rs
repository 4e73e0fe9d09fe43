//! Protocol constants for the shielded pool
//!
//! The denomination is fixed by the protocol and is never written into the
//! pool record; changing it means deploying a different program.

use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/// Fixed deposit / withdrawal amount in lamports (0.1 SOL).
pub const DENOMINATION_LAMPORTS: u64 = LAMPORTS_PER_SOL / 10;

/// Length of the opaque withdrawal proof blob.
pub const PROOF_LEN: usize = 64;

/// Number of bytes of a commitment or nullifier echoed into program logs.
pub const LOG_PREFIX_LEN: usize = 8;
