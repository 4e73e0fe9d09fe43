//! State account definitions for the shielded pool

pub mod merkle_tree;
pub mod nullifier_registry;
pub mod shielded_pool;

pub use merkle_tree::IncrementalMerkleTree;
pub use nullifier_registry::NullifierRegistry;
pub use shielded_pool::{DepositReceipt, ShieldedPool, WithdrawReceipt};
