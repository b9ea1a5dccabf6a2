use anchor_lang::prelude::*;

#[event]
pub struct TokensBridged {
    /// Recipient of the minted wrapped tokens
    pub recipient: Pubkey,

    /// Amount minted
    pub amount: u64,

    /// Timestamp of the mint
    pub timestamp: i64,
}

#[event]
pub struct BridgeRequested {
    /// Sender who burned their wrapped tokens
    pub sender: Pubkey,

    /// Amount burned
    pub amount: u64,

    /// Recipient address on the destination chain
    pub receiver: [u8; 32],

    /// Destination chain identifier
    pub destination_chain: u32,

    /// Timestamp of the request
    pub timestamp: i64,
}

#[event]
pub struct RequestClosed {
    /// Sender whose request was closed
    pub sender: Pubkey,

    /// Amount the request carried
    pub amount: u64,
}

#[event]
pub struct ValidatorSetRotated {
    /// Previous signer set
    pub old_signers: Vec<Pubkey>,

    /// New signer set
    pub new_signers: Vec<Pubkey>,

    /// New consensus threshold
    pub threshold: u8,
}
