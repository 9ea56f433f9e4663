//! Property-based tests for reward accrual arithmetic.
//!
//! Properties tested:
//! 1. reward_per_token never decreases as time moves forward.
//! 2. The projected payout of a funded period never exceeds the funding.
//! 3. Payouts are floored; the kept remainder is below one whole unit.
//! 4. Splitting a balance never pays more than the whole.

#[cfg(test)]
mod tests {
    use {
        proptest::prelude::*,
        trv1_multi_reward_distribution_program::{
            accrual::{
                earned, notify_rate, reward_for_duration, reward_per_token, to_scaled_amount,
                to_transfer_amount,
            },
            constants::{DEFAULT_REWARDS_DURATION, RATE_PRECISION},
            RewardData,
        },
    };

    const E18: u128 = 1_000_000_000_000_000_000;

    fn funded(amount: u128, duration: u64) -> RewardData {
        RewardData {
            period_finish: duration as i64,
            reward_rate: notify_rate(amount, duration).unwrap(),
            last_update_time: 0,
            reward_per_token_stored: 0,
        }
    }

    // ── 1. Monotonic accumulator ──

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn reward_per_token_is_monotonic(
            amount in 1u128..=1_000_000 * E18,
            total_supply in E18..=1_000_000_000 * E18,
            t1 in 0i64..=2 * DEFAULT_REWARDS_DURATION as i64,
            dt in 0i64..=DEFAULT_REWARDS_DURATION as i64,
        ) {
            let data = funded(amount, DEFAULT_REWARDS_DURATION);
            let earlier = reward_per_token(&data, total_supply, t1).unwrap();
            let later = reward_per_token(&data, total_supply, t1 + dt).unwrap();
            prop_assert!(later >= earlier, "rpt went backwards: {earlier} -> {later}");
        }
    }

    // ── 2. Projection bounded by funding ──

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn reward_for_duration_bounded_by_amount(
            amount in 0u128..=100_000_000 * E18,
            duration in 1u64..=365 * 86_400,
        ) {
            let rate = notify_rate(amount, duration).unwrap();
            let projected = reward_for_duration(rate, duration).unwrap();
            prop_assert!(projected <= amount);
            prop_assert_eq!(projected, rate * u128::from(duration) / RATE_PRECISION);
        }
    }

    // ── 3. Floored payout ──

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn payout_keeps_sub_unit_remainder(scaled in any::<u128>()) {
            let paid = to_transfer_amount(scaled);
            let consumed = to_scaled_amount(paid).unwrap();
            prop_assert!(consumed <= scaled);
            prop_assert!(scaled - consumed < RATE_PRECISION);
        }
    }

    // ── 4. Split stakes ──

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn split_balances_never_overpay(
            amount in 1u128..=100_000 * E18,
            a in E18..=1_000_000 * E18,
            b in E18..=1_000_000 * E18,
            elapsed in 0i64..=DEFAULT_REWARDS_DURATION as i64,
        ) {
            let data = funded(amount, DEFAULT_REWARDS_DURATION);
            let rpt = reward_per_token(&data, a + b, elapsed).unwrap();
            let owed_a = earned(a, rpt, 0, 0).unwrap();
            let owed_b = earned(b, rpt, 0, 0).unwrap();
            let whole = earned(a + b, rpt, 0, 0).unwrap();
            prop_assert!(owed_a + owed_b <= whole);
            prop_assert!(to_transfer_amount(whole) <= amount);
        }
    }
}
