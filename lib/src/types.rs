use soroban_sdk::{contracttype, Address};

/// Lifecycle tag stored with every auction record. "Unstarted" is the
/// absence of a record; there is no transition out of `Settled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
#[repr(u32)]
pub enum AuctionPhase {
    Active = 0,
    Settled = 1,
}

/// One auction per asset id. `top_bidder` is `None` until the first
/// accepted bid; `top_bid` starts at the reserve price.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct AuctionData {
    pub asset_id: u64,
    pub seller: Address,
    pub patron: Address,
    pub top_bidder: Option<Address>,
    pub top_bid: i128,
    pub ends_at: u64,
    pub phase: AuctionPhase,
}
