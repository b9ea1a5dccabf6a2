use anchor_lang::prelude::*;

#[error_code]
pub enum BridgeError {
    #[msg("Minimum number of validators not met")]
    MinValidatorsNotMet,

    #[msg("Maximum number of validators exceeded")]
    MaxValidatorsExceeded,

    #[msg("Validators need to be unique")]
    ValidatorsNotUnique,

    #[msg("Not enough signers provided")]
    NotEnoughSigners,

    #[msg("Invalid signer provided")]
    InvalidSigner,

    #[msg("Insufficient funds in the account")]
    InsufficientFunds,
}
