//! Constants for the ferry bridge program

/// Seed for the validator set singleton PDA
pub const VALIDATOR_SET_SEED: &[u8] = b"validator-set";

/// Seed prefix for per-sender bridging request PDAs
pub const BRIDGING_REQUEST_SEED: &[u8] = b"bridging_request";

/// Fewest signers a validator set may hold
pub const MIN_VALIDATORS: usize = 4;

/// Most signers a validator set may hold, bounded by how many signatures
/// fit in one transaction
pub const MAX_VALIDATORS: usize = 19;
