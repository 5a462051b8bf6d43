use soroban_sdk::{contracttype, Address, Env};

use auction_lib::{AuctionData, ContractError};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    PaymentToken,
    AssetRegistry,
    FeeBps,
    AuctionDuration,
    ExtensionWindow,
    ExtensionAmount,
    AccumulatedFee,
    Auction(u64),
}

/* ---------------- OWNER ---------------- */

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ContractError::NotInitialized)
}

/// Authorization check performed at the top of every admin operation.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if caller != &owner(env)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/* ---------------- COLLABORATORS ---------------- */

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn payment_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_asset_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&DataKey::AssetRegistry, registry);
}

pub fn asset_registry(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::AssetRegistry)
        .ok_or(ContractError::NotInitialized)
}

/* ---------------- PROTOCOL PARAMETERS ---------------- */

pub fn set_fee_bps(env: &Env, bps: u32) {
    env.storage().instance().set(&DataKey::FeeBps, &bps);
}

pub fn fee_bps(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::FeeBps)
        .unwrap_or(auction_lib::DEFAULT_FEE_BPS)
}

pub fn set_auction_duration(env: &Env, duration: u64) {
    env.storage().instance().set(&DataKey::AuctionDuration, &duration);
}

pub fn auction_duration(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AuctionDuration)
        .unwrap_or(auction_lib::DEFAULT_AUCTION_DURATION)
}

pub fn set_extension(env: &Env, window: u64, amount: u64) {
    env.storage().instance().set(&DataKey::ExtensionWindow, &window);
    env.storage().instance().set(&DataKey::ExtensionAmount, &amount);
}

pub fn extension_window(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ExtensionWindow)
        .unwrap_or(auction_lib::DEFAULT_EXTENSION_WINDOW)
}

pub fn extension_amount(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ExtensionAmount)
        .unwrap_or(auction_lib::DEFAULT_EXTENSION_AMOUNT)
}

/* ---------------- PROCEEDS ---------------- */

pub fn set_accumulated_fee(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::AccumulatedFee, &amount);
}

pub fn accumulated_fee(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::AccumulatedFee)
        .unwrap_or(0)
}

/* ---------------- AUCTIONS ---------------- */

// Records are permanent history, hence persistent storage rather than
// instance storage like the config above.

pub fn auction(env: &Env, asset_id: u64) -> Option<AuctionData> {
    env.storage().persistent().get(&DataKey::Auction(asset_id))
}

pub fn set_auction(env: &Env, auction: &AuctionData) {
    env.storage()
        .persistent()
        .set(&DataKey::Auction(auction.asset_id), auction);
}
