//! Pause Pool Instruction
//!
//! Emergency stop mechanism - disables deposits and withdrawals.
//! Only callable by pool authority.

use anchor_lang::prelude::*;

use crate::error::PoolError;
use crate::events::PoolPaused;
use crate::state::ShieldedPool;

/// Accounts for pause_pool instruction.
#[derive(Accounts)]
pub struct PausePool<'info> {
    #[account(
        mut,
        has_one = authority @ PoolError::Unauthorized,
    )]
    pub pool: Box<Account<'info, ShieldedPool>>,

    /// Pool authority (must sign).
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<PausePool>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;

    pool.set_paused(true);

    emit!(PoolPaused {
        pool: pool.key(),
        authority: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Pool paused by authority");

    Ok(())
}
