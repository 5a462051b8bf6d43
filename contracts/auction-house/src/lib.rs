#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

use auction_lib::{
    fees, AuctionData, AuctionPhase, ContractError, DEFAULT_AUCTION_DURATION,
    DEFAULT_EXTENSION_AMOUNT, DEFAULT_EXTENSION_WINDOW, DEFAULT_FEE_BPS, MAX_BID_AMOUNT,
    MAX_FEE_BPS, RESERVE_PRICE,
};

mod escrow;
mod registry;
mod storage;

#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    /// One-time setup: protocol owner plus the two collaborator
    /// contracts. Fee, duration and extension parameters start at their
    /// defaults and stay owner-mutable.
    pub fn initialize(
        env: Env,
        owner: Address,
        payment_token: Address,
        asset_registry: Address,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::set_payment_token(&env, &payment_token);
        storage::set_asset_registry(&env, &asset_registry);
        storage::set_fee_bps(&env, DEFAULT_FEE_BPS);
        storage::set_auction_duration(&env, DEFAULT_AUCTION_DURATION);
        storage::set_extension(&env, DEFAULT_EXTENSION_WINDOW, DEFAULT_EXTENSION_AMOUNT);
        storage::set_accumulated_fee(&env, 0);

        Ok(())
    }

    /// Opens the auction for `asset_id` and takes the asset into
    /// custody. `payee` overrides the proceeds recipient; it defaults
    /// to the seller. One auction per asset, ever: a settled record
    /// blocks a restart.
    pub fn start(
        env: Env,
        seller: Address,
        asset_id: u64,
        payee: Option<Address>,
    ) -> Result<(), ContractError> {
        seller.require_auth();

        if storage::auction(&env, asset_id).is_some() {
            return Err(ContractError::AlreadyStarted);
        }
        if registry::owner_of(&env, asset_id)? != seller {
            return Err(ContractError::NotOwner);
        }

        registry::pull_asset(&env, &seller, asset_id)?;

        let ends_at = env.ledger().timestamp() + storage::auction_duration(&env);
        let auction = AuctionData {
            asset_id,
            seller: seller.clone(),
            patron: payee.unwrap_or_else(|| seller.clone()),
            top_bidder: None,
            top_bid: RESERVE_PRICE,
            ends_at,
            phase: AuctionPhase::Active,
        };
        storage::set_auction(&env, &auction);

        env.events().publish(
            (Symbol::new(&env, "auction_started"),),
            (asset_id, seller, auction.patron, ends_at),
        );

        Ok(())
    }

    /// Places a bid. The new amount is escrowed in full before the
    /// previous leader is refunded in full; ties lose.
    pub fn bid(env: Env, bidder: Address, amount: i128, asset_id: u64) -> Result<(), ContractError> {
        bidder.require_auth();

        let mut auction =
            storage::auction(&env, asset_id).ok_or(ContractError::AuctionNotActive)?;
        if auction.phase != AuctionPhase::Active {
            return Err(ContractError::AuctionNotActive);
        }
        let now = env.ledger().timestamp();
        if now >= auction.ends_at {
            return Err(ContractError::AuctionExpired);
        }
        if amount <= 0 || amount > MAX_BID_AMOUNT {
            return Err(ContractError::InvalidAmount);
        }
        if amount <= auction.top_bid {
            return Err(ContractError::BidTooLow);
        }

        escrow::transfer_in(&env, &bidder, amount)?;
        // Full refund even when the leader raises their own bid;
        // netting would change ledger-observable balances.
        if let Some(previous) = auction.top_bidder.clone() {
            escrow::transfer_out(&env, &previous, auction.top_bid)?;
        }

        auction.top_bidder = Some(bidder.clone());
        auction.top_bid = amount;

        // Anti-snipe: a bid inside the window pushes the deadline out
        // by a fixed amount, never pulls it in.
        if auction.ends_at - now < storage::extension_window(&env) {
            auction.ends_at = now + storage::extension_amount(&env);
        }

        storage::set_auction(&env, &auction);

        env.events().publish(
            (Symbol::new(&env, "bid_placed"),),
            (asset_id, bidder, amount, auction.ends_at),
        );

        Ok(())
    }

    /// Settles an expired auction. Callable by anyone. With a winner:
    /// asset to winner, fee to the proceeds account, remainder to the
    /// patron. With no bids: asset back to the seller, nothing else
    /// moves. Terminal; a second call fails.
    pub fn end(env: Env, asset_id: u64) -> Result<(), ContractError> {
        let mut auction =
            storage::auction(&env, asset_id).ok_or(ContractError::AuctionNotActive)?;
        if auction.phase == AuctionPhase::Settled {
            return Err(ContractError::AlreadySettled);
        }
        if env.ledger().timestamp() < auction.ends_at {
            return Err(ContractError::TooEarly);
        }

        auction.phase = AuctionPhase::Settled;
        storage::set_auction(&env, &auction);

        match auction.top_bidder {
            Some(winner) => {
                registry::push_asset(&env, &winner, asset_id)?;

                let fee_amount = fees::fee_for(auction.top_bid, storage::fee_bps(&env));
                if fee_amount > 0 {
                    storage::set_accumulated_fee(
                        &env,
                        storage::accumulated_fee(&env) + fee_amount,
                    );
                }
                escrow::transfer_out(&env, &auction.patron, auction.top_bid - fee_amount)?;

                env.events().publish(
                    (Symbol::new(&env, "auction_settled"),),
                    (asset_id, winner, auction.top_bid, fee_amount),
                );
            }
            None => {
                // No sale: nothing was ever escrowed, zero fee.
                registry::push_asset(&env, &auction.seller, asset_id)?;

                env.events().publish(
                    (Symbol::new(&env, "auction_settled"),),
                    (asset_id, auction.seller, 0i128, 0i128),
                );
            }
        }

        Ok(())
    }

    /* ---------------- ADMIN ---------------- */

    pub fn change_fee(env: Env, caller: Address, new_bps: u32) -> Result<(), ContractError> {
        storage::require_owner(&env, &caller)?;
        if new_bps > MAX_FEE_BPS {
            return Err(ContractError::FeeTooHigh);
        }
        storage::set_fee_bps(&env, new_bps);

        env.events()
            .publish((Symbol::new(&env, "fee_changed"),), (new_bps,));

        Ok(())
    }

    pub fn change_duration(env: Env, caller: Address, new_duration: u64) -> Result<(), ContractError> {
        storage::require_owner(&env, &caller)?;
        if new_duration == 0 {
            return Err(ContractError::InvalidDuration);
        }
        storage::set_auction_duration(&env, new_duration);

        env.events()
            .publish((Symbol::new(&env, "duration_changed"),), (new_duration,));

        Ok(())
    }

    pub fn change_extension(
        env: Env,
        caller: Address,
        window: u64,
        amount: u64,
    ) -> Result<(), ContractError> {
        storage::require_owner(&env, &caller)?;
        // amount >= window is what keeps deadlines monotone under the
        // push-out rule.
        if window == 0 || amount < window {
            return Err(ContractError::InvalidExtension);
        }
        storage::set_extension(&env, window, amount);

        env.events()
            .publish((Symbol::new(&env, "extension_changed"),), (window, amount));

        Ok(())
    }

    /// Single-step ownership transfer, effective immediately. The
    /// contract's own address is the one identity that can never
    /// authorize a later admin call, so it is rejected outright.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        storage::require_owner(&env, &caller)?;
        if new_owner == env.current_contract_address() {
            return Err(ContractError::InvalidOwner);
        }
        if new_owner == caller {
            return Err(ContractError::NoOpTransfer);
        }
        storage::set_owner(&env, &new_owner);

        env.events().publish(
            (Symbol::new(&env, "ownership_transferred"),),
            (caller, new_owner),
        );

        Ok(())
    }

    /// Pays the full accumulated fee balance to `to` and resets it.
    /// Returns the amount paid; an empty account pays nothing.
    pub fn withdraw(env: Env, caller: Address, to: Address) -> Result<i128, ContractError> {
        storage::require_owner(&env, &caller)?;

        let amount = storage::accumulated_fee(&env);
        if amount > 0 {
            storage::set_accumulated_fee(&env, 0);
            escrow::transfer_out(&env, &to, amount)?;
        }

        env.events()
            .publish((Symbol::new(&env, "fees_withdrawn"),), (to, amount));

        Ok(amount)
    }

    /* ---------------- QUERIES ---------------- */

    /// Current leader and leading amount. `None` leader means no bid
    /// has been accepted yet and the amount is the reserve price.
    pub fn top_bid(env: Env, asset_id: u64) -> Result<(Option<Address>, i128), ContractError> {
        let auction = storage::auction(&env, asset_id).ok_or(ContractError::AuctionNotActive)?;
        Ok((auction.top_bidder, auction.top_bid))
    }

    pub fn auction_ends(env: Env, asset_id: u64) -> Result<u64, ContractError> {
        let auction = storage::auction(&env, asset_id).ok_or(ContractError::AuctionNotActive)?;
        Ok(auction.ends_at)
    }

    pub fn patron(env: Env, asset_id: u64) -> Result<Address, ContractError> {
        let auction = storage::auction(&env, asset_id).ok_or(ContractError::AuctionNotActive)?;
        Ok(auction.patron)
    }

    /// Full record, settled ones included; settled records remain
    /// queryable as history.
    pub fn get_auction(env: Env, asset_id: u64) -> Option<AuctionData> {
        storage::auction(&env, asset_id)
    }

    pub fn fee(env: Env) -> u32 {
        storage::fee_bps(&env)
    }

    pub fn auction_duration(env: Env) -> u64 {
        storage::auction_duration(&env)
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        storage::owner(&env)
    }

    /// Accumulated, not-yet-withdrawn fee revenue.
    pub fn profit(env: Env) -> i128 {
        storage::accumulated_fee(&env)
    }
}

#[cfg(test)]
mod test_admin;
