//! Deposit Instruction
//!
//! Moves exactly one denomination from the depositor into the pool and
//! appends the depositor's leaf to the commitment tree.
//!
//! The leaf is computed off-chain by the depositor, e.g. with
//! [`crate::crypto::commitment::compute_commitment`]:
//! ```text
//! leaf = Poseidon(nullifier, secret)
//! ```
//! The pool never sees the nullifier or secret. Users MUST keep
//! `(nullifier, secret, leaf_index)`; lost secrets mean lost funds.

use anchor_lang::prelude::*;

use crate::constants::{DENOMINATION_LAMPORTS, LOG_PREFIX_LEN};
use crate::events::DepositEvent;
use crate::ledger::LamportLedger;
use crate::state::ShieldedPool;

/// Accounts for deposit instruction.
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// Pool state (also holds the pooled lamports).
    #[account(mut)]
    pub pool: Box<Account<'info, ShieldedPool>>,

    /// User making the deposit (signs and pays).
    #[account(mut)]
    pub depositor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handler for deposit instruction.
///
/// # Arguments
/// * `leaf` - Pre-computed commitment (32 bytes, non-zero)
pub fn handler(ctx: Context<Deposit>, leaf: [u8; 32]) -> Result<()> {
    let mut ledger = LamportLedger::new(
        ctx.accounts.pool.to_account_info(),
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    )?;

    let pool = &mut ctx.accounts.pool;
    let receipt = pool.deposit(leaf, DENOMINATION_LAMPORTS, &mut ledger)?;

    emit!(DepositEvent {
        pool: pool.key(),
        commitment: leaf,
        leaf_index: receipt.leaf_index,
        merkle_root: receipt.root,
        amount: DENOMINATION_LAMPORTS,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Deposit successful");
    msg!("Leaf index: {}", receipt.leaf_index);
    msg!("Commitment: {:?}", &leaf[..LOG_PREFIX_LEN]); // Only log first 8 bytes for privacy

    Ok(())
}
