//! ferry bridge program
//!
//! On-chain core of a cross-chain token bridge. A validator set, stored as
//! a singleton PDA, collectively controls a wrapped SPL mint: a quorum of
//! 2/3 (rounded up) of the set co-signs every privileged action. Inbound
//! transfers mint wrapped tokens to a recipient; outbound transfers burn
//! them and leave a per-sender request account for the validators to
//! finalize.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

pub use constants::{BRIDGING_REQUEST_SEED, MAX_VALIDATORS, MIN_VALIDATORS, VALIDATOR_SET_SEED};
pub use errors::BridgeError;
pub use events::{BridgeRequested, RequestClosed, TokensBridged, ValidatorSetRotated};
use handler::{external, internal, threshold};
pub use state::{BridgingRequest, ValidatorSet};

declare_id!("B4S6sKjepMH9YrMrfwH13fH9xWDbp2m5eX7KpNFVeRaA");

pub mod api;
pub mod constants;
pub mod errors;
pub mod events;
mod handler;
pub mod state;
mod utils;

#[program]
pub mod ferry {
    use super::*;

    /// Create the validator set that controls the bridge
    pub fn initialize(ctx: Context<Initialize>, signers: Vec<Pubkey>) -> Result<()> {
        internal::initialize(ctx, signers)
    }

    /// Mint wrapped tokens to a recipient (quorum action)
    pub fn bridge_tokens(ctx: Context<BridgeTokens>, amount: u64) -> Result<()> {
        threshold::bridge_tokens(ctx, amount)
    }

    /// Burn wrapped tokens and open an outbound request (public action)
    pub fn bridge_request(
        ctx: Context<BridgeRequest>,
        amount: u64,
        receiver: [u8; 32],
        destination_chain: u32,
    ) -> Result<()> {
        external::bridge_request(ctx, amount, receiver, destination_chain)
    }

    /// Close a finalized or abandoned outbound request (quorum action)
    pub fn close_request(ctx: Context<CloseRequest>) -> Result<()> {
        threshold::close_request(ctx)
    }

    /// Replace the validator set (quorum action)
    pub fn validator_set_change(
        ctx: Context<ValidatorSetChange>,
        new_signers: Vec<Pubkey>,
    ) -> Result<()> {
        threshold::validator_set_change(ctx, new_signers)
    }
}

// ============================================================================
// Account Structs
// ============================================================================

/// Accounts for initializing the validator set.
///
/// Open to any caller, but the fixed PDA derivation makes it single-shot:
/// a second initialization fails at account creation.
#[derive(Accounts)]
#[instruction(signers: Vec<Pubkey>)]
pub struct Initialize<'info> {
    /// Rent payer for the new account.
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The validator set singleton, sized to the initial signer list.
    #[account(
        init,
        payer = signer,
        space = ValidatorSet::space(signers.len()),
        seeds = [VALIDATOR_SET_SEED],
        bump,
        constraint = signers.len() >= MIN_VALIDATORS @ BridgeError::MinValidatorsNotMet,
        constraint = signers.len() <= MAX_VALIDATORS @ BridgeError::MaxValidatorsExceeded,
    )]
    pub validator_set: Account<'info, ValidatorSet>,

    pub system_program: Program<'info, System>,
}

/// Accounts for minting wrapped tokens to a recipient.
///
/// A quorum action: the trailing remaining accounts are the validator
/// co-signers. The mint's authority must be the validator set PDA; the
/// token program rejects the mint otherwise.
#[derive(Accounts)]
pub struct BridgeTokens<'info> {
    /// Pays for the recipient's token account when it has to be created.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The wrapped token mint, authority bound to the validator set PDA.
    #[account(mut)]
    pub mint: Account<'info, Mint>,

    /// CHECK: any account may receive; it only owns the associated token
    /// account written below
    pub recipient: UncheckedAccount<'info>,

    /// CHECK: created on demand under the canonical associated-token
    /// derivation for `(mint, recipient)`
    #[account(mut)]
    pub recipient_ata: UncheckedAccount<'info>,

    /// Signing authority for the mint.
    #[account(
        seeds = [VALIDATOR_SET_SEED],
        bump = validator_set.bump,
    )]
    pub validator_set: Account<'info, ValidatorSet>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Accounts for opening an outbound bridging request.
#[derive(Accounts)]
pub struct BridgeRequest<'info> {
    /// The user bridging out; pays rent for the request account.
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The sender's token account for the wrapped mint. Must already be
    /// initialized and owned by the signer.
    #[account(
        mut,
        token::mint = mint,
        token::authority = signer,
    )]
    pub signers_ata: Account<'info, TokenAccount>,

    /// The wrapped token mint; supply shrinks by the burned amount.
    #[account(mut)]
    pub mint: Account<'info, Mint>,

    /// The request record. The per-sender derivation caps each sender at
    /// one live request.
    #[account(
        init,
        payer = signer,
        space = BridgingRequest::SPACE,
        seeds = [BRIDGING_REQUEST_SEED, signer.key().as_ref()],
        bump,
    )]
    pub bridging_request: Account<'info, BridgingRequest>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Accounts for closing a bridging request.
///
/// A quorum action: the trailing remaining accounts are the validator
/// co-signers. The signer receives the request account's rent.
#[derive(Accounts)]
pub struct CloseRequest<'info> {
    /// Rent refundee for the closed request account.
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The request being erased, checked against its stored sender's
    /// canonical derivation.
    #[account(
        mut,
        close = signer,
        seeds = [BRIDGING_REQUEST_SEED, bridging_request.sender.as_ref()],
        bump,
    )]
    pub bridging_request: Account<'info, BridgingRequest>,

    /// Current validator set for quorum validation.
    #[account(
        seeds = [VALIDATOR_SET_SEED],
        bump = validator_set.bump,
    )]
    pub validator_set: Account<'info, ValidatorSet>,

    pub system_program: Program<'info, System>,
}

/// Accounts for rotating the validator set.
///
/// A quorum action validated against the *current* set; the account is
/// resized to fit the new signer list, with the signer covering growth
/// and receiving the refund on shrink.
#[derive(Accounts)]
#[instruction(new_signers: Vec<Pubkey>)]
pub struct ValidatorSetChange<'info> {
    /// Realloc payer and rent refundee.
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The validator set singleton; its address and bump never change.
    #[account(
        mut,
        seeds = [VALIDATOR_SET_SEED],
        bump = validator_set.bump,
        realloc = ValidatorSet::space(new_signers.len()),
        realloc::payer = signer,
        realloc::zero = false,
    )]
    pub validator_set: Account<'info, ValidatorSet>,

    pub system_program: Program<'info, System>,
}
