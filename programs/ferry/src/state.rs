use anchor_lang::prelude::*;

/// The authoritative signer set controlling privileged bridge actions.
///
/// A singleton PDA. Every privileged instruction checks its trailing
/// co-signers against `signers` and requires at least `threshold` of them.
#[account]
pub struct ValidatorSet {
    /// Public keys authorized to co-sign privileged actions
    pub signers: Vec<Pubkey>,

    /// Co-signatures required for consensus, 2/3 of the signer count
    /// rounded up
    pub threshold: u8,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl ValidatorSet {
    /// Calculate space needed for the account
    pub fn space(num_signers: usize) -> usize {
        8 + // discriminator
        4 + (num_signers * 32) + // signers vec
        1 + // threshold
        1 // bump
    }
}

/// An open outbound transfer, one per sender.
///
/// Created when a holder burns wrapped tokens to move them to a foreign
/// chain; erased by the validator quorum once the foreign-chain settlement
/// is finalized or the request is abandoned.
#[account]
pub struct BridgingRequest {
    /// The user who opened the request
    pub sender: Pubkey,

    /// Token units burned for this transfer
    pub amount: u64,

    /// Recipient address on the destination chain
    pub receiver: [u8; 32],

    /// Destination chain identifier
    pub destination_chain: u32,
}

impl BridgingRequest {
    /// Account size, fixed
    pub const SPACE: usize = 8 + // discriminator
        32 + // sender
        8 + // amount
        32 + // receiver
        4; // destination_chain
}
