//! Fixed-point scaling factors and reward-period defaults.

/// Seconds per day, used to express reward durations.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Default reward period: every `NotifyReward` funds exactly 7 days.
pub const DEFAULT_REWARDS_DURATION: u64 = 7 * SECONDS_PER_DAY;

// ---------------------------------------------------------------------------
// Precision
//
//   Two scaling factors are layered:
//
//   * RATE_PRECISION (1e12) scales `reward_rate` and every owed amount so
//     sub-unit-per-second rates survive integer division.
//   * SHARE_PRECISION (1e18) scales `reward_per_token` so the per-staked-unit
//     ratio keeps precision when total supply is large.
//
//   Payouts divide RATE_PRECISION back out (floor).
// ---------------------------------------------------------------------------

/// Precision applied to reward rates and owed amounts.
pub const RATE_PRECISION: u128 = 1_000_000_000_000;

/// Precision applied to the per-staked-unit accumulator.
pub const SHARE_PRECISION: u128 = 1_000_000_000_000_000_000;

/// Decimals of tokens minted by the test token ledger.
pub const DEFAULT_DECIMALS: u32 = 18;

/// Upper bound on encoded instruction size accepted by the entrypoint.
pub const MAX_INSTRUCTION_DATA_LEN: u64 = 1232;
