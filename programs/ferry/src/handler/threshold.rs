//! Threshold action handlers - operations gated on a validator quorum

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token,
    token::{self, MintTo},
};

use crate::{
    constants::{MAX_VALIDATORS, MIN_VALIDATORS, VALIDATOR_SET_SEED},
    errors::BridgeError,
    events::{RequestClosed, TokensBridged, ValidatorSetRotated},
    utils,
};

/// Mint wrapped tokens to a recipient after an inbound foreign-chain
/// transfer.
pub fn bridge_tokens(ctx: Context<crate::BridgeTokens>, amount: u64) -> Result<()> {
    let validator_set = &ctx.accounts.validator_set;
    utils::verify_quorum(validator_set, ctx.remaining_accounts)?;

    // The recipient may never have held the wrapped token before.
    if ctx.accounts.recipient_ata.data_is_empty() {
        associated_token::create(CpiContext::new(
            ctx.accounts.associated_token_program.to_account_info(),
            associated_token::Create {
                payer: ctx.accounts.payer.to_account_info(),
                associated_token: ctx.accounts.recipient_ata.to_account_info(),
                authority: ctx.accounts.recipient.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                token_program: ctx.accounts.token_program.to_account_info(),
            },
        ))?;
    }

    let seeds = &[VALIDATOR_SET_SEED, &[validator_set.bump]];
    let signer_seeds = &[&seeds[..]];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.recipient_ata.to_account_info(),
                authority: validator_set.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TokensBridged {
        recipient: ctx.accounts.recipient.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Minted {} wrapped tokens to {}",
        amount,
        ctx.accounts.recipient.key()
    );

    Ok(())
}

/// Close a bridging request, refunding its rent to the signer.
pub fn close_request(ctx: Context<crate::CloseRequest>) -> Result<()> {
    utils::verify_quorum(&ctx.accounts.validator_set, ctx.remaining_accounts)?;

    let bridging_request = &ctx.accounts.bridging_request;
    emit!(RequestClosed {
        sender: bridging_request.sender,
        amount: bridging_request.amount,
    });

    msg!("Closing bridging request {}", bridging_request.key());

    Ok(())
}

/// Replace the validator set, under quorum of the current one.
///
/// The new set takes effect for the next transaction; this one was
/// validated against the old membership.
pub fn validator_set_change(
    ctx: Context<crate::ValidatorSetChange>,
    new_signers: Vec<Pubkey>,
) -> Result<()> {
    let validator_set = &mut ctx.accounts.validator_set;
    utils::verify_quorum(validator_set, ctx.remaining_accounts)?;

    require!(
        new_signers.len() >= MIN_VALIDATORS,
        BridgeError::MinValidatorsNotMet
    );
    require!(
        new_signers.len() <= MAX_VALIDATORS,
        BridgeError::MaxValidatorsExceeded
    );
    utils::ensure_unique(&new_signers)?;

    let new_threshold = utils::quorum_threshold(new_signers.len());
    emit!(ValidatorSetRotated {
        old_signers: validator_set.signers.clone(),
        new_signers: new_signers.clone(),
        threshold: new_threshold,
    });

    validator_set.signers = new_signers;
    validator_set.threshold = new_threshold;

    msg!(
        "Validator set rotated to {} signers, threshold {}",
        validator_set.signers.len(),
        new_threshold
    );

    Ok(())
}
