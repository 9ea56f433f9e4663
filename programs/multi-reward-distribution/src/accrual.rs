//! Reward accrual arithmetic.
//!
//! Every function here is pure: it takes a snapshot and returns the next
//! value, leaving the write-back to [`crate::state::MultiRewardPool::settle`].
//!
//! # Formulas
//!
//! ```text
//! last_applicable  = min(now, period_finish)
//! reward_per_token = stored + (last_applicable - last_update_time)
//!                             × reward_rate × SHARE_PRECISION / total_supply
//! earned           = balance × (reward_per_token - paid) / SHARE_PRECISION + rewards
//! payout           = earned / RATE_PRECISION                      (floor)
//! reward_rate      = amount × RATE_PRECISION / duration
//! for_duration     = reward_rate × duration / RATE_PRECISION
//! ```
//!
//! `reward_rate`, `earned` and `rewards` live in the RATE_PRECISION-scaled
//! domain; `reward_per_token` additionally carries SHARE_PRECISION.
//! Products are formed in 256 bits and narrowed back with an overflow error.

use {
    crate::{
        constants::{RATE_PRECISION, SHARE_PRECISION},
        error::MultiRewardError,
        state::RewardData,
    },
    ruint::aliases::U256,
    solana_clock::UnixTimestamp,
};

/// `a × b × c / denominator`, floor.
fn mul_mul_div(a: u128, b: u128, c: u128, denominator: u128) -> Result<u128, MultiRewardError> {
    let product = U256::from(a)
        .checked_mul(U256::from(b))
        .and_then(|ab| ab.checked_mul(U256::from(c)))
        .ok_or(MultiRewardError::ArithmeticOverflow)?;
    let quotient = product
        .checked_div(U256::from(denominator))
        .ok_or(MultiRewardError::ArithmeticOverflow)?;
    u128::try_from(quotient).map_err(|_| MultiRewardError::ArithmeticOverflow)
}

/// Whole seconds from `from` to `to`, zero when `to` is not later.
fn elapsed_seconds(from: UnixTimestamp, to: UnixTimestamp) -> u128 {
    u128::try_from(to.saturating_sub(from)).unwrap_or_default()
}

/// The latest instant at which the current reward period still pays out.
pub fn last_time_reward_applicable(now: UnixTimestamp, period_finish: UnixTimestamp) -> UnixTimestamp {
    now.min(period_finish)
}

/// Cumulative reward per staked unit at `now`.
///
/// With nothing staked the accumulator is frozen: rewards emitted while the
/// pool is empty are not attributed to anyone.
pub fn reward_per_token(
    data: &RewardData,
    total_supply: u128,
    now: UnixTimestamp,
) -> Result<u128, MultiRewardError> {
    if total_supply == 0 {
        return Ok(data.reward_per_token_stored);
    }
    let elapsed = elapsed_seconds(
        data.last_update_time,
        last_time_reward_applicable(now, data.period_finish),
    );
    let increment = mul_mul_div(elapsed, data.reward_rate, SHARE_PRECISION, total_supply)?;
    data.reward_per_token_stored
        .checked_add(increment)
        .ok_or(MultiRewardError::ArithmeticOverflow)
}

/// Rewards owed to a balance, in the RATE_PRECISION-scaled domain.
pub fn earned(
    balance: u128,
    reward_per_token: u128,
    reward_per_token_paid: u128,
    rewards: u128,
) -> Result<u128, MultiRewardError> {
    let delta = reward_per_token.saturating_sub(reward_per_token_paid);
    mul_mul_div(balance, delta, 1, SHARE_PRECISION)?
        .checked_add(rewards)
        .ok_or(MultiRewardError::ArithmeticOverflow)
}

/// Whole token units transferable for a scaled owed amount.
pub fn to_transfer_amount(scaled: u128) -> u128 {
    scaled / RATE_PRECISION
}

/// The scaled amount consumed by paying out `amount` whole units.
pub fn to_scaled_amount(amount: u128) -> Result<u128, MultiRewardError> {
    amount
        .checked_mul(RATE_PRECISION)
        .ok_or(MultiRewardError::ArithmeticOverflow)
}

/// Scaled per-second rate that spreads `amount` evenly over `duration`.
pub fn notify_rate(amount: u128, duration: u64) -> Result<u128, MultiRewardError> {
    mul_mul_div(amount, RATE_PRECISION, 1, u128::from(duration))
}

/// Total whole-unit payout of `reward_rate` over `duration`.
pub fn reward_for_duration(reward_rate: u128, duration: u64) -> Result<u128, MultiRewardError> {
    mul_mul_div(reward_rate, u128::from(duration), 1, RATE_PRECISION)
}
