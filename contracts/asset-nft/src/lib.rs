#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Symbol};

use auction_lib::ContractError;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Name,
    Symbol,
    Counter,
    Owner(u64),
    Uri(u64),
}

#[contract]
pub struct AssetNft;

#[contractimpl]
impl AssetNft {
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Name, &name);
        env.storage().instance().set(&DataKey::Symbol, &symbol);
        env.storage().instance().set(&DataKey::Counter, &0u64);
        Ok(())
    }

    /// Mints the next asset to `to` and returns its id. Ids are
    /// sequential from zero.
    pub fn mint(env: Env, to: Address, uri: String) -> u64 {
        to.require_auth();

        let id: u64 = env.storage().instance().get(&DataKey::Counter).unwrap_or(0);
        env.storage().persistent().set(&DataKey::Owner(id), &to);
        env.storage().persistent().set(&DataKey::Uri(id), &uri);
        env.storage().instance().set(&DataKey::Counter, &(id + 1));

        env.events().publish((Symbol::new(&env, "minted"),), (id, to));

        id
    }

    pub fn owner_of(env: Env, id: u64) -> Result<Address, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(id))
            .ok_or(ContractError::AssetNotFound)
    }

    /// Moves `id` from `from` to `to`. Only the current holder may move
    /// an asset, and they must have authorized the call.
    pub fn transfer(env: Env, from: Address, to: Address, id: u64) -> Result<(), ContractError> {
        from.require_auth();

        let holder: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Owner(id))
            .ok_or(ContractError::AssetNotFound)?;
        if holder != from {
            return Err(ContractError::NotOwner);
        }

        env.storage().persistent().set(&DataKey::Owner(id), &to);

        env.events()
            .publish((Symbol::new(&env, "transferred"),), (id, from, to));

        Ok(())
    }

    pub fn token_uri(env: Env, id: u64) -> Result<String, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Uri(id))
            .ok_or(ContractError::AssetNotFound)
    }

    pub fn total_minted(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::Counter).unwrap_or(0)
    }
}
