#![cfg(test)]

use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env, String};

use asset_nft::{AssetNft, AssetNftClient};
use auction_lib::{ContractError, DEFAULT_FEE_BPS, MAX_FEE_BPS, TOKEN_SCALE};

use crate::{AuctionHouse, AuctionHouseClient};

struct TestCtx<'a> {
    auction: AuctionHouseClient<'a>,
    nft: AssetNftClient<'a>,
    token: token::Client<'a>,
    minter: token::StellarAssetClient<'a>,
    owner: Address,
}

fn setup(env: &Env) -> TestCtx<'_> {
    env.mock_all_auths();

    let owner = Address::generate(env);
    let token_admin = Address::generate(env);
    let token_id = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();

    let nft_id = env.register_contract(None, AssetNft);
    let nft = AssetNftClient::new(env, &nft_id);
    nft.initialize(
        &Address::generate(env),
        &String::from_str(env, "Auctionable Asset"),
        &String::from_str(env, "ASSET"),
    );

    let auction_id = env.register_contract(None, AuctionHouse);
    let auction = AuctionHouseClient::new(env, &auction_id);
    auction.initialize(&owner, &token_id, &nft_id);

    TestCtx {
        auction,
        nft,
        token: token::Client::new(env, &token_id),
        minter: token::StellarAssetClient::new(env, &token_id),
        owner,
    }
}

/// Runs one full auction so that fees accumulate in the contract.
fn settle_one(env: &Env, ctx: &TestCtx, bid: i128) {
    let seller = Address::generate(env);
    let id = ctx
        .nft
        .mint(&seller, &String::from_str(env, "http://memes.org"));
    ctx.auction.start(&seller, &id, &None);

    let bidder = Address::generate(env);
    ctx.minter.mint(&bidder, &bid);
    ctx.auction.bid(&bidder, &bid, &id);

    let ends = ctx.auction.auction_ends(&id);
    env.ledger().with_mut(|li| li.timestamp = ends);
    ctx.auction.end(&id);
}

#[test]
fn initialize_runs_once() {
    let env = Env::default();
    let ctx = setup(&env);

    let result = ctx.auction.try_initialize(
        &Address::generate(&env),
        &ctx.token.address,
        &ctx.nft.address,
    );
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));

    assert_eq!(ctx.auction.owner(), ctx.owner);
    assert_eq!(ctx.auction.fee(), DEFAULT_FEE_BPS);
}

#[test]
fn change_fee_enforces_the_cap() {
    let env = Env::default();
    let ctx = setup(&env);

    ctx.auction.change_fee(&ctx.owner, &MAX_FEE_BPS);
    assert_eq!(ctx.auction.fee(), MAX_FEE_BPS);

    let result = ctx.auction.try_change_fee(&ctx.owner, &(MAX_FEE_BPS + 1));
    assert_eq!(result, Err(Ok(ContractError::FeeTooHigh)));
    assert_eq!(ctx.auction.fee(), MAX_FEE_BPS);

    ctx.auction.change_fee(&ctx.owner, &0);
    assert_eq!(ctx.auction.fee(), 0);
}

#[test]
fn change_fee_rejects_strangers() {
    let env = Env::default();
    let ctx = setup(&env);

    let stranger = Address::generate(&env);
    let result = ctx.auction.try_change_fee(&stranger, &100);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
    assert_eq!(ctx.auction.fee(), DEFAULT_FEE_BPS);
}

#[test]
fn new_fee_applies_to_later_settlements() {
    let env = Env::default();
    let ctx = setup(&env);

    ctx.auction.change_fee(&ctx.owner, &MAX_FEE_BPS);
    settle_one(&env, &ctx, 1_000 * TOKEN_SCALE);

    // 10% of 1000.
    assert_eq!(ctx.auction.profit(), 100 * TOKEN_SCALE);
}

#[test]
fn change_duration_shapes_new_auctions() {
    let env = Env::default();
    env.ledger().with_mut(|li| li.timestamp = 5_000);
    let ctx = setup(&env);

    ctx.auction.change_duration(&ctx.owner, &3_600);
    assert_eq!(ctx.auction.auction_duration(), 3_600);

    let seller = Address::generate(&env);
    let id = ctx
        .nft
        .mint(&seller, &String::from_str(&env, "http://memes.org"));
    ctx.auction.start(&seller, &id, &None);
    assert_eq!(ctx.auction.auction_ends(&id), 5_000 + 3_600);

    let result = ctx.auction.try_change_duration(&ctx.owner, &0);
    assert_eq!(result, Err(Ok(ContractError::InvalidDuration)));

    let stranger = Address::generate(&env);
    let result = ctx.auction.try_change_duration(&stranger, &60);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
    assert_eq!(ctx.auction.auction_duration(), 3_600);
}

#[test]
fn change_extension_validates_the_pair() {
    let env = Env::default();
    let ctx = setup(&env);

    ctx.auction.change_extension(&ctx.owner, &600, &600);

    // A zero window would disable anti-sniping silently.
    let result = ctx.auction.try_change_extension(&ctx.owner, &0, &600);
    assert_eq!(result, Err(Ok(ContractError::InvalidExtension)));

    // An amount below the window could pull the deadline backwards.
    let result = ctx.auction.try_change_extension(&ctx.owner, &600, &599);
    assert_eq!(result, Err(Ok(ContractError::InvalidExtension)));

    let stranger = Address::generate(&env);
    let result = ctx.auction.try_change_extension(&stranger, &300, &900);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
}

#[test]
fn ownership_transfer_hands_over_control() {
    let env = Env::default();
    let ctx = setup(&env);

    let successor = Address::generate(&env);
    ctx.auction.transfer_ownership(&ctx.owner, &successor);
    assert_eq!(ctx.auction.owner(), successor);

    // The new owner governs; the old one is locked out.
    ctx.auction.change_fee(&successor, &250);
    let result = ctx.auction.try_change_fee(&ctx.owner, &250);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
}

#[test]
fn ownership_transfer_rejects_bad_targets() {
    let env = Env::default();
    let ctx = setup(&env);

    let stranger = Address::generate(&env);
    let result = ctx
        .auction
        .try_transfer_ownership(&stranger, &Address::generate(&env));
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));

    // The contract itself is not a valid owner.
    let result = ctx
        .auction
        .try_transfer_ownership(&ctx.owner, &ctx.auction.address);
    assert_eq!(result, Err(Ok(ContractError::InvalidOwner)));

    // Transferring to yourself is a no-op and flagged as such.
    let result = ctx.auction.try_transfer_ownership(&ctx.owner, &ctx.owner);
    assert_eq!(result, Err(Ok(ContractError::NoOpTransfer)));

    assert_eq!(ctx.auction.owner(), ctx.owner);
}

#[test]
fn withdraw_pays_out_accumulated_fees() {
    let env = Env::default();
    let ctx = setup(&env);

    settle_one(&env, &ctx, 1_000 * TOKEN_SCALE);
    assert_eq!(ctx.auction.profit(), 50 * TOKEN_SCALE);

    let treasury = Address::generate(&env);
    let paid = ctx.auction.withdraw(&ctx.owner, &treasury);
    assert_eq!(paid, 50 * TOKEN_SCALE);
    assert_eq!(ctx.token.balance(&treasury), 50 * TOKEN_SCALE);
    assert_eq!(ctx.auction.profit(), 0);

    // Draining twice yields nothing more.
    let paid = ctx.auction.withdraw(&ctx.owner, &treasury);
    assert_eq!(paid, 0);
    assert_eq!(ctx.token.balance(&treasury), 50 * TOKEN_SCALE);
}

#[test]
fn withdraw_is_owner_only() {
    let env = Env::default();
    let ctx = setup(&env);

    settle_one(&env, &ctx, 1_000 * TOKEN_SCALE);

    let stranger = Address::generate(&env);
    let result = ctx.auction.try_withdraw(&stranger, &stranger);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
    assert_eq!(ctx.auction.profit(), 50 * TOKEN_SCALE);
}
