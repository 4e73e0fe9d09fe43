//! Lamport movements between the pool and its users
//!
//! Transitions never touch balances directly: they ask a [`Ledger`] whether
//! a movement can happen, stage their state change, and only then move the
//! funds. [`LamportLedger`] is the on-chain implementation.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::PoolError;

/// Fund-transfer side effect of the pool transitions.
pub trait Ledger {
    /// Check that `amount` can move from the counterparty into the pool.
    fn ensure_pay_in(&self, amount: u64) -> Result<()>;

    /// Move `amount` from the counterparty into the pool.
    fn pay_in(&mut self, amount: u64) -> Result<()>;

    /// Check that the pool can release `amount` to the counterparty.
    fn ensure_pay_out(&self, amount: u64) -> Result<()>;

    /// Move `amount` from the pool to the counterparty.
    fn pay_out(&mut self, amount: u64) -> Result<()>;
}

/// SOL ledger over the pool account and one counterparty.
///
/// - pay in: System Program transfer signed by the counterparty (depositor)
/// - pay out: direct lamport debit of the program-owned pool
pub struct LamportLedger<'info> {
    pub pool: AccountInfo<'info>,
    pub counterparty: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    /// Lamports the pool must keep to stay rent exempt
    pub pool_rent_floor: u64,
}

impl<'info> LamportLedger<'info> {
    pub fn new(
        pool: AccountInfo<'info>,
        counterparty: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
    ) -> Result<Self> {
        let pool_rent_floor = Rent::get()?.minimum_balance(pool.data_len());
        Ok(Self {
            pool,
            counterparty,
            system_program,
            pool_rent_floor,
        })
    }

    /// Pool lamports above the rent-exempt floor.
    pub fn pool_spendable(&self) -> u64 {
        self.pool.lamports().saturating_sub(self.pool_rent_floor)
    }
}

impl<'info> Ledger for LamportLedger<'info> {
    fn ensure_pay_in(&self, amount: u64) -> Result<()> {
        require!(
            self.counterparty.lamports() >= amount,
            PoolError::InsufficientFunds
        );
        Ok(())
    }

    fn pay_in(&mut self, amount: u64) -> Result<()> {
        let cpi_ctx = CpiContext::new(
            self.system_program.clone(),
            Transfer {
                from: self.counterparty.clone(),
                to: self.pool.clone(),
            },
        );
        system_program::transfer(cpi_ctx, amount)
    }

    fn ensure_pay_out(&self, amount: u64) -> Result<()> {
        require!(
            self.pool_spendable() >= amount,
            PoolError::InsufficientFunds
        );
        Ok(())
    }

    fn pay_out(&mut self, amount: u64) -> Result<()> {
        self.ensure_pay_out(amount)?;

        let pool_balance = self
            .pool
            .lamports()
            .checked_sub(amount)
            .ok_or(error!(PoolError::InsufficientFunds))?;
        let recipient_balance = self
            .counterparty
            .lamports()
            .checked_add(amount)
            .ok_or(error!(PoolError::ArithmeticOverflow))?;

        **self.pool.try_borrow_mut_lamports()? = pool_balance;
        **self.counterparty.try_borrow_mut_lamports()? = recipient_balance;
        Ok(())
    }
}
