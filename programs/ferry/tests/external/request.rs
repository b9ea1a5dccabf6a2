//! Tests for the bridge_request instruction

use crate::Test;
use ferry::{api, api::pda, BridgeError};
use solana_sdk::{account::Account, pubkey::Pubkey};

const AMOUNT: u64 = 1_000_000_000;
const RECEIVER: [u8; 32] = [7; 32];
const DESTINATION_CHAIN: u32 = 1;

#[test]
fn test_bridge_request_burns_and_records() {
    let test = Test::new();
    let sender = Pubkey::new_unique();
    let instruction = api::bridge_request(sender, test.mint, AMOUNT, RECEIVER, DESTINATION_CHAIN);

    let accounts = test.bridge_request_accounts(
        sender,
        Test::token_account(&test.mint, &sender, AMOUNT),
        Test::mint_account(&pda::validator_set(), AMOUNT),
        Account::default(),
    );
    let result = test.mollusk.process_instruction(&instruction, &accounts);
    crate::assert_success(&result);

    // the sender's balance and the supply both shrink by the burned amount
    let signers_ata = pda::associated_token_account(&sender, &test.mint);
    assert_eq!(crate::token_balance(&result, &signers_ata), 0);
    assert_eq!(crate::mint_supply(&result, &test.mint), 0);

    let request = crate::read_bridging_request(&result, &sender);
    assert_eq!(request.sender, sender);
    assert_eq!(request.amount, AMOUNT);
    assert_eq!(request.receiver, RECEIVER);
    assert_eq!(request.destination_chain, DESTINATION_CHAIN);
}

#[test]
fn test_bridge_request_is_one_per_sender() {
    let test = Test::new();
    let sender = Pubkey::new_unique();
    let instruction = api::bridge_request(sender, test.mint, AMOUNT, RECEIVER, DESTINATION_CHAIN);

    let accounts = test.bridge_request_accounts(
        sender,
        Test::token_account(&test.mint, &sender, 2 * AMOUNT),
        Test::mint_account(&pda::validator_set(), 2 * AMOUNT),
        Account::default(),
    );
    let result = test.mollusk.process_instruction(&instruction, &accounts);
    crate::assert_success(&result);

    // replay against the resulting state: the request PDA is occupied now
    let accounts = test.bridge_request_accounts(
        sender,
        crate::carried(&result, &pda::associated_token_account(&sender, &test.mint)),
        crate::carried(&result, &test.mint),
        crate::carried(&result, &pda::bridging_request(&sender)),
    );
    let result = test.mollusk.process_instruction(&instruction, &accounts);
    assert!(
        result.program_result.is_err(),
        "re-creating an occupied request account must fail"
    );
}

#[test]
fn test_bridge_request_rejects_overdraw() {
    let test = Test::new();
    let sender = Pubkey::new_unique();
    let instruction =
        api::bridge_request(sender, test.mint, 2 * AMOUNT, RECEIVER, DESTINATION_CHAIN);

    let accounts = test.bridge_request_accounts(
        sender,
        Test::token_account(&test.mint, &sender, AMOUNT),
        Test::mint_account(&pda::validator_set(), AMOUNT),
        Account::default(),
    );
    let result = test.mollusk.process_instruction(&instruction, &accounts);
    crate::assert_bridge_error(&result, BridgeError::InsufficientFunds);
}

#[test]
fn test_bridge_request_requires_initialized_ata() {
    let test = Test::new();
    let sender = Pubkey::new_unique();
    let instruction = api::bridge_request(sender, test.mint, AMOUNT, RECEIVER, DESTINATION_CHAIN);

    let accounts = test.bridge_request_accounts(
        sender,
        Account::default(),
        Test::mint_account(&pda::validator_set(), AMOUNT),
        Account::default(),
    );
    let result = test.mollusk.process_instruction(&instruction, &accounts);
    crate::assert_custom_error(
        &result,
        anchor_lang::error::ErrorCode::AccountNotInitialized as u32,
    );
}

#[test]
fn test_bridge_request_rejects_malformed_receiver() {
    let test = Test::new();
    let sender = Pubkey::new_unique();
    let mut instruction =
        api::bridge_request(sender, test.mint, AMOUNT, RECEIVER, DESTINATION_CHAIN);

    // shorten the argument bytes: the receiver no longer decodes as a full
    // 32-byte address
    instruction.data.truncate(instruction.data.len() - 5);

    let accounts = test.bridge_request_accounts(
        sender,
        Test::token_account(&test.mint, &sender, AMOUNT),
        Test::mint_account(&pda::validator_set(), AMOUNT),
        Account::default(),
    );
    let result = test.mollusk.process_instruction(&instruction, &accounts);
    crate::assert_custom_error(
        &result,
        anchor_lang::error::ErrorCode::InstructionDidNotDeserialize as u32,
    );
}

#[test]
fn test_outbound_round_trip() {
    let test = Test::new();
    let validators = crate::pubkeys(10);
    let sender = Pubkey::new_unique();

    // open the request
    let instruction = api::bridge_request(sender, test.mint, AMOUNT, RECEIVER, DESTINATION_CHAIN);
    let accounts = test.bridge_request_accounts(
        sender,
        Test::token_account(&test.mint, &sender, AMOUNT),
        Test::mint_account(&pda::validator_set(), AMOUNT),
        Account::default(),
    );
    let opened = test.mollusk.process_instruction(&instruction, &accounts);
    crate::assert_success(&opened);

    // quorum closes it, rent going back to the sender
    let instruction = api::close_request(sender, sender, &validators[..7]);
    let accounts = test.close_request_accounts(
        sender,
        &sender,
        crate::carried(&opened, &pda::bridging_request(&sender)),
        Test::validator_set_account(validators.clone()),
        &validators[..7],
    );
    let closed = test.mollusk.process_instruction(&instruction, &accounts);
    crate::assert_success(&closed);

    let request = crate::carried(&closed, &pda::bridging_request(&sender));
    assert_eq!(request.lamports, 0, "request account must be gone");
}
