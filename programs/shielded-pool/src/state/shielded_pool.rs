//! Shielded pool state account
//!
//! One fixed-size record per pool. Every transition reads and writes the
//! whole record inside a single instruction, and the runtime serializes
//! instructions that write the same account, so each check-then-mutate
//! below runs without interleaving.
//!
//! Transitions stage their change on a copy of the tree or registry, move
//! funds through the [`Ledger`], and only then write the copy back. A
//! failure at any step leaves the record exactly as it was.

use anchor_lang::prelude::*;

use crate::crypto::{is_zero_hash, ProofVerifier, WithdrawProof, WithdrawPublicInputs};
use crate::error::PoolError;
use crate::ledger::Ledger;
use crate::state::merkle_tree::IncrementalMerkleTree;
use crate::state::nullifier_registry::NullifierRegistry;

/// Shielded pool account.
///
/// Layout after the discriminator:
/// ```text
/// root (32) || filled_subtrees (8 x 32) || next_index (2)
///   || used_nullifiers (16 x 32) || authority (32) || is_paused (1)
/// ```
#[account]
#[derive(Debug, Default)]
pub struct ShieldedPool {
    /// Commitment accumulator
    pub tree: IncrementalMerkleTree,

    /// Spent nullifiers
    pub nullifiers: NullifierRegistry,

    /// Pool authority (admin) - can pause and transfer authority
    pub authority: Pubkey,

    /// Pool paused flag - blocks deposits and withdrawals when true
    pub is_paused: bool,
}

/// Outcome of a successful deposit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositReceipt {
    pub leaf_index: u16,
    pub root: [u8; 32],
}

/// Outcome of a successful withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawReceipt {
    pub nullifier: [u8; 32],
    pub nullifiers_remaining: u8,
}

impl ShieldedPool {
    /// Account space calculation
    pub const LEN: usize = 8 // discriminator
        + IncrementalMerkleTree::LEN
        + NullifierRegistry::LEN
        + 32 // authority
        + 1; // is_paused

    /// Whether the record has been claimed by an authority.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Initialize an empty pool owned by `authority`.
    pub fn initialize(&mut self, authority: Pubkey) -> Result<()> {
        require!(!self.is_initialized(), PoolError::AlreadyInitialized);
        require!(authority != Pubkey::default(), PoolError::Unauthorized);

        self.tree = IncrementalMerkleTree::new();
        self.nullifiers = NullifierRegistry::new();
        self.authority = authority;
        self.is_paused = false;
        Ok(())
    }

    /// Check if pool is not paused
    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.is_paused, PoolError::PoolPaused);
        Ok(())
    }

    /// Deposit the fixed denomination against a new leaf.
    ///
    /// Capacity and the payer's balance are checked before anything moves;
    /// the leaf is only committed once the transfer has gone through.
    pub fn deposit<L: Ledger>(
        &mut self,
        leaf: [u8; 32],
        denomination: u64,
        ledger: &mut L,
    ) -> Result<DepositReceipt> {
        self.require_not_paused()?;
        require!(!is_zero_hash(&leaf), PoolError::InvalidCommitment);
        require!(!self.tree.is_full(), PoolError::TreeFull);
        ledger.ensure_pay_in(denomination)?;

        let mut staged = self.tree;
        let leaf_index = staged.insert(leaf)?;

        ledger.pay_in(denomination)?;
        self.tree = staged;

        Ok(DepositReceipt {
            leaf_index,
            root: self.tree.root(),
        })
    }

    /// Withdraw the fixed denomination to `recipient`.
    ///
    /// The nullifier is checked against the registry before the verifier
    /// runs, so a replay reports `AlreadySpent` whatever proof it carries.
    /// A verifier that rejects the proof or fails to run both surface as
    /// `InvalidProof`.
    pub fn withdraw<V: ProofVerifier, L: Ledger>(
        &mut self,
        proof: &WithdrawProof,
        nullifier: [u8; 32],
        recipient: Pubkey,
        denomination: u64,
        verifier: &V,
        ledger: &mut L,
    ) -> Result<WithdrawReceipt> {
        self.require_not_paused()?;
        require!(!is_zero_hash(&nullifier), PoolError::InvalidNullifier);
        require!(!self.nullifiers.contains(&nullifier), PoolError::AlreadySpent);
        require!(!self.nullifiers.is_full(), PoolError::RegistryFull);
        ledger.ensure_pay_out(denomination)?;

        let root = self.tree.root();
        let inputs = WithdrawPublicInputs::new(root, nullifier, recipient, denomination);
        inputs.validate()?;

        let proof_valid = verifier
            .verify(&root, &nullifier, proof, &inputs)
            .map_err(|_| error!(PoolError::InvalidProof))?;
        require!(proof_valid, PoolError::InvalidProof);

        let mut staged = self.nullifiers;
        staged.insert(nullifier)?;

        ledger.pay_out(denomination)?;
        self.nullifiers = staged;

        Ok(WithdrawReceipt {
            nullifier,
            nullifiers_remaining: self.nullifiers.remaining() as u8,
        })
    }

    /// Set pause state
    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }

    /// Transfer authority to new address
    pub fn transfer_authority(&mut self, new_authority: Pubkey) -> Result<()> {
        require!(new_authority != Pubkey::default(), PoolError::Unauthorized);
        self.authority = new_authority;
        Ok(())
    }
}
