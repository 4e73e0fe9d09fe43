//! Withdraw Instruction
//!
//! Releases one denomination to `recipient` against a proof of membership
//! in the current tree and a never-seen nullifier.
//!
//! # Verification
//! The proof is checked by [`crate::crypto::active_verifier`]. Without a
//! real verifier wired in, that is the fail-closed verifier and every
//! withdrawal is rejected with `VerifierUnavailable`. Builds with
//! `--features dev-mode` accept any proof. NEVER deploy a dev-mode build.
//!
//! The recipient key is part of the public inputs, so a proof cannot be
//! replayed toward a different recipient.

use anchor_lang::prelude::*;

use crate::constants::{DENOMINATION_LAMPORTS, LOG_PREFIX_LEN};
use crate::crypto::{active_verifier, WithdrawProof};
use crate::events::WithdrawEvent;
use crate::ledger::LamportLedger;
use crate::state::ShieldedPool;

/// Accounts for withdraw instruction.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub pool: Box<Account<'info, ShieldedPool>>,

    /// Receives the withdrawn lamports.
    #[account(mut)]
    pub recipient: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Handler for withdraw instruction.
///
/// # Arguments
/// * `proof` - Opaque 64-byte proof blob
/// * `nullifier` - Nullifier revealed for the spent note
pub fn handler(ctx: Context<Withdraw>, proof: [u8; 64], nullifier: [u8; 32]) -> Result<()> {
    let recipient = ctx.accounts.recipient.key();
    let mut ledger = LamportLedger::new(
        ctx.accounts.pool.to_account_info(),
        ctx.accounts.recipient.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    )?;

    let pool = &mut ctx.accounts.pool;
    let receipt = pool.withdraw(
        &WithdrawProof::from(proof),
        nullifier,
        recipient,
        DENOMINATION_LAMPORTS,
        &active_verifier(),
        &mut ledger,
    )?;

    emit!(WithdrawEvent {
        pool: pool.key(),
        nullifier: receipt.nullifier,
        recipient,
        amount: DENOMINATION_LAMPORTS,
        nullifiers_remaining: receipt.nullifiers_remaining,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Withdrawal successful");
    msg!("Recipient: {}", recipient);
    msg!("Nullifier: {:?}", &nullifier[..LOG_PREFIX_LEN]);

    Ok(())
}
