//! External/public action handlers - operations any token holder can submit

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn};

use crate::{errors::BridgeError, events::BridgeRequested};

/// Open an outbound bridging request.
///
/// The wrapped tokens are burned up front under the sender's own authority;
/// closing the request later releases no custody. The per-sender PDA keeps
/// at most one request open per sender.
pub fn bridge_request(
    ctx: Context<crate::BridgeRequest>,
    amount: u64,
    receiver: [u8; 32],
    destination_chain: u32,
) -> Result<()> {
    require!(
        ctx.accounts.signers_ata.amount >= amount,
        BridgeError::InsufficientFunds
    );

    let cpi_accounts = Burn {
        mint: ctx.accounts.mint.to_account_info(),
        from: ctx.accounts.signers_ata.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    token::burn(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        amount,
    )?;

    let bridging_request = &mut ctx.accounts.bridging_request;
    bridging_request.sender = ctx.accounts.signer.key();
    bridging_request.amount = amount;
    bridging_request.receiver = receiver;
    bridging_request.destination_chain = destination_chain;

    emit!(BridgeRequested {
        sender: bridging_request.sender,
        amount,
        receiver,
        destination_chain,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Bridging request opened: {} tokens from {} to chain {}",
        amount,
        bridging_request.sender,
        destination_chain
    );

    Ok(())
}
