use soroban_sdk::contracterror;

/// Error taxonomy shared by the auction house and the asset registry.
/// Every fallible entrypoint returns one of these; an `Err` aborts the
/// invocation and the host reverts all storage writes and subcalls.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    AlreadyStarted = 4,
    AuctionNotActive = 5,
    AlreadySettled = 6,
    TooEarly = 7,
    AuctionExpired = 8,
    BidTooLow = 9,
    InvalidAmount = 10,
    Unauthorized = 11,
    FeeTooHigh = 12,
    InvalidOwner = 13,
    NoOpTransfer = 14,
    InvalidDuration = 15,
    InvalidExtension = 16,
    TransferFailed = 17,
    AssetNotFound = 18,
}
