//! Internal handlers - single-shot setup actions

use anchor_lang::prelude::*;

use crate::utils;

/// Create the validator set singleton.
///
/// Open to any caller; the PDA derivation makes it first-writer-wins, so a
/// second call fails at account creation.
pub fn initialize(ctx: Context<crate::Initialize>, signers: Vec<Pubkey>) -> Result<()> {
    utils::ensure_unique(&signers)?;

    let validator_set = &mut ctx.accounts.validator_set;
    validator_set.threshold = utils::quorum_threshold(signers.len());
    validator_set.signers = signers;
    validator_set.bump = ctx.bumps.validator_set;

    msg!(
        "Validator set initialized with {} signers, threshold {}",
        validator_set.signers.len(),
        validator_set.threshold
    );

    Ok(())
}
