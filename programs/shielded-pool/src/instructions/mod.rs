//! Instruction handlers for the shielded pool

pub mod admin;
pub mod deposit;
pub mod initialize;
pub mod withdraw;

pub use admin::*;
pub use deposit::*;
pub use initialize::*;
pub use withdraw::*;
