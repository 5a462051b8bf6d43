#![no_std]
pub mod errors;
pub mod fees;
pub mod registry;
pub mod types;

pub use errors::ContractError;
pub use fees::fee_for;
pub use registry::{AssetRegistry, AssetRegistryClient};
pub use types::*;

/// Ledger precision of the payment token (18 decimals).
pub const TOKEN_SCALE: i128 = 1_000_000_000_000_000_000;

/// Starting price every auction opens at: 500 whole tokens.
pub const RESERVE_PRICE: i128 = 500 * TOKEN_SCALE;

// Fee config: basis points (bps). 1000 bps = 10%.
pub const FEE_DENOMINATOR: i128 = 10_000;
pub const MAX_FEE_BPS: u32 = 1_000;
pub const DEFAULT_FEE_BPS: u32 = 500;

// Timing defaults, all in seconds.
pub const DEFAULT_AUCTION_DURATION: u64 = 3 * 86_400;
pub const DEFAULT_EXTENSION_WINDOW: u64 = 300;
pub const DEFAULT_EXTENSION_AMOUNT: u64 = 900;

/// Largest accepted bid. Keeps the bps fee product inside u128.
pub const MAX_BID_AMOUNT: i128 = i128::MAX / FEE_DENOMINATOR;
