//! Unpause Pool Instruction
//!
//! Resumes pool operations after emergency pause.

use anchor_lang::prelude::*;

use crate::error::PoolError;
use crate::events::PoolUnpaused;
use crate::state::ShieldedPool;

/// Accounts for unpause_pool instruction.
#[derive(Accounts)]
pub struct UnpausePool<'info> {
    #[account(
        mut,
        has_one = authority @ PoolError::Unauthorized,
    )]
    pub pool: Box<Account<'info, ShieldedPool>>,

    /// Pool authority (must sign).
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UnpausePool>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;

    pool.set_paused(false);

    emit!(PoolUnpaused {
        pool: pool.key(),
        authority: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Pool unpaused");

    Ok(())
}
