//! Escrow-ledger adapter over the payment token. All bid funds move
//! through these two calls; a failed transfer aborts the whole
//! invocation, so escrow and record updates commit together or not at
//! all.

use soroban_sdk::{token, Address, Env};

use auction_lib::ContractError;

use crate::storage;

pub fn transfer_in(env: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    let client = token::Client::new(env, &storage::payment_token(env)?);
    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(_) => Ok(()),
        Err(_) => Err(ContractError::TransferFailed),
    }
}

pub fn transfer_out(env: &Env, to: &Address, amount: i128) -> Result<(), ContractError> {
    let client = token::Client::new(env, &storage::payment_token(env)?);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(_) => Ok(()),
        Err(_) => Err(ContractError::TransferFailed),
    }
}
