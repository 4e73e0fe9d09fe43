//! Shielded Pool - fixed-denomination SOL mixer
//!
//! Deposits append a commitment leaf to a depth-8 incremental Merkle tree;
//! withdrawals reveal a nullifier and a proof of membership, and pay one
//! denomination to the recipient. All state lives in a single fixed-size
//! `ShieldedPool` account.

use anchor_lang::prelude::*;

pub mod constants;
pub mod crypto;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;


use instructions::*;

declare_id!("2AGfYw7MKNNmDrY5JE5Um9UNiXdDF4ydTXUQ47e5T8Nu");

#[program]
pub mod shielded_pool {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, leaf: [u8; 32]) -> Result<()> {
        instructions::deposit::handler(ctx, leaf)
    }

    pub fn withdraw(ctx: Context<Withdraw>, proof: [u8; 64], nullifier: [u8; 32]) -> Result<()> {
        instructions::withdraw::handler(ctx, proof, nullifier)
    }

    pub fn pause_pool(ctx: Context<PausePool>) -> Result<()> {
        instructions::admin::pause::handler(ctx)
    }

    pub fn unpause_pool(ctx: Context<UnpausePool>) -> Result<()> {
        instructions::admin::unpause::handler(ctx)
    }

    pub fn update_authority(ctx: Context<UpdateAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::update_authority::handler(ctx, new_authority)
    }
}
