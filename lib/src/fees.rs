use crate::FEE_DENOMINATOR;

/// Protocol fee for a winning bid: `floor(amount * bps / 10_000)`.
/// Callers must keep `amount` within `0..=MAX_BID_AMOUNT` so the
/// intermediate product fits in u128.
pub fn fee_for(amount: i128, bps: u32) -> i128 {
    ((amount as u128 * bps as u128) / FEE_DENOMINATOR as u128) as i128
}
