//! Shared validation for the ferry bridge program

use anchor_lang::prelude::*;

use crate::errors::BridgeError;
use crate::state::ValidatorSet;

/// Consensus threshold for a signer count: 2/3 of `n`, rounded up.
pub fn quorum_threshold(n: usize) -> u8 {
    (2 * n).div_ceil(3) as u8
}

/// Reject a signer list containing the same key twice.
pub fn ensure_unique(signers: &[Pubkey]) -> Result<()> {
    let mut sorted = signers.to_vec();
    sorted.sort();
    sorted.dedup();
    require!(sorted.len() == signers.len(), BridgeError::ValidatorsNotUnique);
    Ok(())
}

/// Verify that the trailing co-signer accounts form a quorum of the
/// current validator set.
///
/// Every co-signer must have signed the transaction, be a member of the
/// set, and appear at most once; a duplicated account is not an
/// independent co-signature. The count check runs first so a thin quorum
/// reports `NotEnoughSigners` before any per-signer validation.
///
/// Returns the approving validators.
pub fn verify_quorum(
    validator_set: &ValidatorSet,
    cosigners: &[AccountInfo],
) -> Result<Vec<Pubkey>> {
    require!(
        cosigners.len() >= validator_set.threshold as usize,
        BridgeError::NotEnoughSigners
    );

    let mut approvals: Vec<Pubkey> = Vec::with_capacity(cosigners.len());
    for cosigner in cosigners {
        require!(cosigner.is_signer, BridgeError::InvalidSigner);
        require!(
            validator_set.signers.contains(cosigner.key),
            BridgeError::InvalidSigner
        );
        require!(!approvals.contains(cosigner.key), BridgeError::InvalidSigner);
        approvals.push(*cosigner.key);
    }

    Ok(approvals)
}
