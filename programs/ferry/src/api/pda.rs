//! PDA and program address helpers for the ferry program

use anchor_lang::system_program;
use anchor_spl::{associated_token, token};
use solana_sdk::pubkey::Pubkey;

use crate::constants::{BRIDGING_REQUEST_SEED, VALIDATOR_SET_SEED};

/// System program ID
pub const SYSTEM_PROGRAM: Pubkey = system_program::ID;

/// Token program ID
pub const TOKEN_PROGRAM: Pubkey = token::ID;

/// Associated token program ID
pub const ASSOCIATED_TOKEN_PROGRAM: Pubkey = associated_token::ID;

/// Derive the validator set PDA
pub fn validator_set() -> Pubkey {
    Pubkey::find_program_address(&[VALIDATOR_SET_SEED], &crate::ID).0
}

/// Derive the bridging request PDA for a sender
pub fn bridging_request(sender: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[BRIDGING_REQUEST_SEED, sender.as_ref()], &crate::ID).0
}

/// Derive the associated token account for a wallet and the wrapped mint
pub fn associated_token_account(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
    associated_token::get_associated_token_address(wallet, mint)
}
