//! Instruction builders for the ferry program

use anchor_lang::{prelude::AccountMeta, InstructionData};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

use crate::api::pda;

/// Build the initialize instruction
pub fn initialize(signer: Pubkey, signers: Vec<Pubkey>) -> Instruction {
    let data = crate::instruction::Initialize { signers };

    // build the instruction accounts
    let accounts = vec![
        AccountMeta::new(signer, true),                // signer (signer, mut)
        AccountMeta::new(pda::validator_set(), false), // validator_set (mut)
        AccountMeta::new_readonly(pda::SYSTEM_PROGRAM, false), // system_program
    ];

    Instruction::new_with_bytes(crate::ID, &data.data(), accounts)
}

/// Build the bridge_tokens instruction
///
/// The validator co-signers are appended as trailing signer accounts.
pub fn bridge_tokens(
    payer: Pubkey,
    mint: Pubkey,
    recipient: Pubkey,
    amount: u64,
    cosigners: &[Pubkey],
) -> Instruction {
    let data = crate::instruction::BridgeTokens { amount };
    let recipient_ata = pda::associated_token_account(&recipient, &mint);

    // build the instruction accounts
    let mut accounts = vec![
        AccountMeta::new(payer, true),             // payer (signer, mut)
        AccountMeta::new(mint, false),             // mint (mut)
        AccountMeta::new_readonly(recipient, false), // recipient
        AccountMeta::new(recipient_ata, false),    // recipient_ata (mut)
        AccountMeta::new_readonly(pda::validator_set(), false), // validator_set
        AccountMeta::new_readonly(pda::TOKEN_PROGRAM, false), // token_program
        AccountMeta::new_readonly(pda::ASSOCIATED_TOKEN_PROGRAM, false), // associated_token_program
        AccountMeta::new_readonly(pda::SYSTEM_PROGRAM, false), // system_program
    ];

    // add validator co-signers as remaining accounts
    for cosigner in cosigners {
        accounts.push(AccountMeta::new_readonly(*cosigner, true));
    }

    Instruction::new_with_bytes(crate::ID, &data.data(), accounts)
}

/// Build the bridge_request instruction
pub fn bridge_request(
    signer: Pubkey,
    mint: Pubkey,
    amount: u64,
    receiver: [u8; 32],
    destination_chain: u32,
) -> Instruction {
    let data = crate::instruction::BridgeRequest {
        amount,
        receiver,
        destination_chain,
    };
    let signers_ata = pda::associated_token_account(&signer, &mint);

    // build the instruction accounts
    let accounts = vec![
        AccountMeta::new(signer, true),       // signer (signer, mut)
        AccountMeta::new(signers_ata, false), // signers_ata (mut)
        AccountMeta::new(mint, false),        // mint (mut)
        AccountMeta::new(pda::bridging_request(&signer), false), // bridging_request (mut)
        AccountMeta::new_readonly(pda::TOKEN_PROGRAM, false), // token_program
        AccountMeta::new_readonly(pda::SYSTEM_PROGRAM, false), // system_program
    ];

    Instruction::new_with_bytes(crate::ID, &data.data(), accounts)
}

/// Build the close_request instruction
///
/// The validator co-signers are appended as trailing signer accounts.
pub fn close_request(signer: Pubkey, sender: Pubkey, cosigners: &[Pubkey]) -> Instruction {
    let data = crate::instruction::CloseRequest {};

    // build the instruction accounts
    let mut accounts = vec![
        AccountMeta::new(signer, true), // signer (signer, mut)
        AccountMeta::new(pda::bridging_request(&sender), false), // bridging_request (mut)
        AccountMeta::new_readonly(pda::validator_set(), false), // validator_set
        AccountMeta::new_readonly(pda::SYSTEM_PROGRAM, false), // system_program
    ];

    // add validator co-signers as remaining accounts
    for cosigner in cosigners {
        accounts.push(AccountMeta::new_readonly(*cosigner, true));
    }

    Instruction::new_with_bytes(crate::ID, &data.data(), accounts)
}

/// Build the validator_set_change instruction
///
/// The co-signers must be members of the set being replaced.
pub fn validator_set_change(
    signer: Pubkey,
    new_signers: Vec<Pubkey>,
    cosigners: &[Pubkey],
) -> Instruction {
    let data = crate::instruction::ValidatorSetChange { new_signers };

    // build the instruction accounts
    let mut accounts = vec![
        AccountMeta::new(signer, true),                // signer (signer, mut)
        AccountMeta::new(pda::validator_set(), false), // validator_set (mut)
        AccountMeta::new_readonly(pda::SYSTEM_PROGRAM, false), // system_program
    ];

    // add validator co-signers as remaining accounts
    for cosigner in cosigners {
        accounts.push(AccountMeta::new_readonly(*cosigner, true));
    }

    Instruction::new_with_bytes(crate::ID, &data.data(), accounts)
}
