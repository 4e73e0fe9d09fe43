//! Initialize Pool Instruction
//!
//! The pool account is created by the caller (system `create_account` owned
//! by this program, `ShieldedPool::LEN` bytes, rent exempt) in the same
//! transaction. `zero` makes Anchor refuse any account that already carries
//! a discriminator, so a second call on the same pool fails.

use anchor_lang::prelude::*;

use crate::events::PoolInitialized;
use crate::state::{
    merkle_tree::TREE_DEPTH, nullifier_registry::NULLIFIER_CAPACITY, ShieldedPool,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(zero)]
    pub pool: Box<Account<'info, ShieldedPool>>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let authority = ctx.accounts.authority.key();

    pool.initialize(authority)?;

    emit!(PoolInitialized {
        pool: pool.key(),
        authority,
        tree_depth: TREE_DEPTH as u8,
        nullifier_capacity: NULLIFIER_CAPACITY as u8,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Shielded pool initialized");
    msg!("Tree depth: {}, nullifier slots: {}", TREE_DEPTH, NULLIFIER_CAPACITY);

    Ok(())
}
