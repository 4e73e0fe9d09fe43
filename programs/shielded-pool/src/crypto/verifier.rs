//! Withdrawal proof verifier contract
//!
//! The pool treats proof verification as an opaque oracle: given the
//! current root, the nullifier being spent, the proof blob and the public
//! inputs, a verifier answers "valid" or "invalid" (or fails). The proof
//! attests knowledge of `(nullifier, secret, index)` such that
//! `Poseidon(nullifier, secret)` is the leaf at `index` under `root`.
//!
//! Transition logic is generic over [`ProofVerifier`]; a real zero-knowledge
//! verifier plugs in by implementing the trait and being returned from
//! [`active_verifier`].
//!
//! # Dev Mode
//! When built with `--features dev-mode`, [`AcceptAllVerifier`] is active.
//! This is ONLY for protocol-flow testing - NEVER use in production!

use anchor_lang::prelude::*;

use super::public_inputs::WithdrawPublicInputs;
use crate::constants::PROOF_LEN;
use crate::error::PoolError;

/// Opaque withdrawal proof (64 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawProof(pub [u8; PROOF_LEN]);

impl WithdrawProof {
    pub fn as_bytes(&self) -> &[u8; PROOF_LEN] {
        &self.0
    }
}

impl From<[u8; PROOF_LEN]> for WithdrawProof {
    fn from(bytes: [u8; PROOF_LEN]) -> Self {
        Self(bytes)
    }
}

/// Boolean proof verification capability.
pub trait ProofVerifier {
    /// Returns `Ok(true)` only if `proof` is valid for `root`, `nullifier`
    /// and `inputs`. The caller turns both `Ok(false)` and any `Err` into
    /// `InvalidProof`.
    ///
    /// A circuit verifier consumes `proof.as_bytes()` and
    /// `inputs.to_field_elements()`: root, nullifier, recipient and
    /// denomination as big-endian BN254 scalars, in that order. Root and
    /// recipient are reduced modulo `r` (`field::reduce_to_scalar`), the
    /// denomination is `field::u64_to_scalar`, and the nullifier is passed
    /// as is since `validate` already requires it to be canonical.
    fn verify(
        &self,
        root: &[u8; 32],
        nullifier: &[u8; 32],
        proof: &WithdrawProof,
        inputs: &WithdrawPublicInputs,
    ) -> Result<bool>;
}

/// Accepts every proof. Protocol-flow testing only.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAllVerifier;

impl ProofVerifier for AcceptAllVerifier {
    fn verify(
        &self,
        _root: &[u8; 32],
        _nullifier: &[u8; 32],
        _proof: &WithdrawProof,
        _inputs: &WithdrawPublicInputs,
    ) -> Result<bool> {
        msg!("WARNING: dev verifier accepted proof without checking it");
        Ok(true)
    }
}

/// Rejects every proof with `VerifierUnavailable`.
///
/// Active whenever no real verifier has been wired in, so a build without
/// one can take deposits but never release funds.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailClosedVerifier;

impl ProofVerifier for FailClosedVerifier {
    fn verify(
        &self,
        _root: &[u8; 32],
        _nullifier: &[u8; 32],
        _proof: &WithdrawProof,
        _inputs: &WithdrawPublicInputs,
    ) -> Result<bool> {
        msg!("Proof verification unavailable in this build");
        Err(error!(PoolError::VerifierUnavailable))
    }
}

/// Verifier used by the `withdraw` instruction.
#[cfg(feature = "dev-mode")]
pub fn active_verifier() -> AcceptAllVerifier {
    AcceptAllVerifier
}

/// Verifier used by the `withdraw` instruction.
#[cfg(not(feature = "dev-mode"))]
pub fn active_verifier() -> FailClosedVerifier {
    FailClosedVerifier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::assert_pool_err;

    fn sample_inputs() -> WithdrawPublicInputs {
        WithdrawPublicInputs::new([1u8; 32], [2u8; 32], Pubkey::new_unique(), 100)
    }

    #[test]
    fn test_accept_all_verifier() {
        let inputs = sample_inputs();
        let proof = WithdrawProof([7u8; PROOF_LEN]);
        let result = AcceptAllVerifier.verify(&inputs.root, &inputs.nullifier, &proof, &inputs);
        assert!(result.unwrap());
    }

    #[test]
    fn test_fail_closed_verifier_errors() {
        let inputs = sample_inputs();
        let proof = WithdrawProof([7u8; PROOF_LEN]);
        let result = FailClosedVerifier.verify(&inputs.root, &inputs.nullifier, &proof, &inputs);
        assert_pool_err(result, PoolError::VerifierUnavailable);
    }

    #[cfg(not(feature = "dev-mode"))]
    #[test]
    fn test_default_build_is_fail_closed() {
        let inputs = sample_inputs();
        let proof = WithdrawProof([0u8; PROOF_LEN]);
        assert!(active_verifier()
            .verify(&inputs.root, &inputs.nullifier, &proof, &inputs)
            .is_err());
    }

    #[test]
    fn test_proof_from_bytes() {
        let bytes = [0x42u8; PROOF_LEN];
        let proof = WithdrawProof::from(bytes);
        assert_eq!(proof.as_bytes(), &bytes);
    }
}
