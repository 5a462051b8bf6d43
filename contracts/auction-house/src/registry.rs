//! Asset-registry adapter: custody moves and ownership queries against
//! the sibling registry contract, through its client interface only.

use soroban_sdk::{Address, Env};

use auction_lib::{AssetRegistryClient, ContractError};

use crate::storage;

pub fn owner_of(env: &Env, id: u64) -> Result<Address, ContractError> {
    let client = AssetRegistryClient::new(env, &storage::asset_registry(env)?);
    match client.try_owner_of(&id) {
        Ok(Ok(holder)) => Ok(holder),
        _ => Err(ContractError::AssetNotFound),
    }
}

pub fn pull_asset(env: &Env, from: &Address, id: u64) -> Result<(), ContractError> {
    let client = AssetRegistryClient::new(env, &storage::asset_registry(env)?);
    match client.try_transfer(from, &env.current_contract_address(), &id) {
        Ok(_) => Ok(()),
        Err(_) => Err(ContractError::TransferFailed),
    }
}

pub fn push_asset(env: &Env, to: &Address, id: u64) -> Result<(), ContractError> {
    let client = AssetRegistryClient::new(env, &storage::asset_registry(env)?);
    match client.try_transfer(&env.current_contract_address(), to, &id) {
        Ok(_) => Ok(()),
        Err(_) => Err(ContractError::TransferFailed),
    }
}
