use soroban_sdk::{contractclient, Address, Env};

/// Ownership-transfer interface the auction house requires from the
/// asset registry. The auction core only ever talks to this client;
/// it never depends on the registry implementation.
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    /// Moves `id` from `from` to `to`. Requires `from` authorization.
    fn transfer(env: Env, from: Address, to: Address, id: u64);

    /// Current holder of `id`.
    fn owner_of(env: Env, id: u64) -> Address;
}
