//! Update Authority Instruction
//!
//! Hands pool admin rights to a new address. Only callable by the current
//! authority. The default pubkey is refused so the pool cannot be orphaned.

use anchor_lang::prelude::*;

use crate::error::PoolError;
use crate::events::AuthorityUpdated;
use crate::state::ShieldedPool;

/// Accounts for update_authority instruction.
#[derive(Accounts)]
pub struct UpdateAuthority<'info> {
    #[account(
        mut,
        has_one = authority @ PoolError::Unauthorized,
    )]
    pub pool: Box<Account<'info, ShieldedPool>>,

    /// Current pool authority (must sign).
    pub authority: Signer<'info>,
}

/// # Arguments
/// * `new_authority` - Address of new pool authority
pub fn handler(ctx: Context<UpdateAuthority>, new_authority: Pubkey) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let old_authority = pool.authority;

    pool.transfer_authority(new_authority)?;

    emit!(AuthorityUpdated {
        pool: pool.key(),
        old_authority,
        new_authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Authority transferred");
    msg!("Old authority: {}", old_authority);
    msg!("New authority: {}", new_authority);

    Ok(())
}
