//! E2E Test: Reward Lifecycle
//!
//! Verifies a reward period end to end:
//! - notifyReward sets the rate and the 7-day period
//! - Nothing is claimable before time passes
//! - A sole staker drains the whole period, minus sub-unit dust
//! - Several reward tokens accrue independently
//! - Snapshot / revert restores the chain exactly

use {
    trv1_e2e_tests::helpers::*,
    trv1_multi_reward_distribution_program::{MultiRewardEvent, MultiRewardInstruction},
};

fn funded_chain() -> (SimChain, solana_pubkey::Pubkey, solana_pubkey::Pubkey) {
    let (mut chain, token1, token2) = standard_fixture();
    let deployer = chain.deployer;
    for (token, amount) in [(token1, tokens(10_000)), (token2, tokens(20_000))] {
        chain.send_ok(&deployer, MultiRewardInstruction::AddReward { token });
        chain.send_ok(&deployer, MultiRewardInstruction::NotifyReward { token, amount });
    }
    (chain, token1, token2)
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: notifyReward
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_notify_reward() {
    init_logging();
    println!("\n========================================");
    println!("  REWARDS: notifyReward");
    println!("========================================\n");

    let (mut chain, token1, _token2) = standard_fixture();
    let deployer = chain.deployer;
    chain.send_ok(&deployer, MultiRewardInstruction::AddReward { token: token1 });
    let events = chain.send_ok(
        &deployer,
        MultiRewardInstruction::NotifyReward {
            token: token1,
            amount: tokens(10_000),
        },
    );
    assert_eq!(
        events,
        vec![MultiRewardEvent::RewardAdded {
            token: token1,
            amount: tokens(10_000),
        }]
    );

    let now = chain.now();
    let data = *chain.pool().reward_data(&token1).unwrap();
    // 10_000e18 × 1e12 / 604_800
    assert_eq!(data.reward_rate, 16_534_391_534_391_534_391_534_391_534);
    assert_eq!(data.last_update_time, now);
    assert_eq!(data.period_finish, now + WEEK);
    assert_eq!(
        chain.pool().reward_for_duration(&token1).unwrap(),
        tokens(10_000) - 1
    );
    println!("  reward rate          = {}", data.reward_rate);
    println!("  reward for duration  = {}", tokens(10_000) - 1);

    assert_eq!(
        chain.pool().last_time_reward_applicable(&token1, now).unwrap(),
        now
    );
    chain.advance(WEEK + DAY);
    assert_eq!(
        chain
            .pool()
            .last_time_reward_applicable(&token1, chain.now())
            .unwrap(),
        data.period_finish
    );
    println!("✓ Rate, period and projection match");
}

#[test]
fn test_notify_reward_second_token() {
    init_logging();
    let (chain, _token1, token2) = funded_chain();
    let data = chain.pool().reward_data(&token2).unwrap();
    assert_eq!(data.reward_rate, 33_068_783_068_783_068_783_068_783_068);
    assert_eq!(
        chain.pool().reward_for_duration(&token2).unwrap(),
        tokens(20_000) - 1
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: claimableRewards right after staking
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_nothing_claimable_without_elapsed_time() {
    init_logging();
    let (mut chain, token1, token2) = funded_chain();
    let staking_token = chain.staking_token;
    let deployer = chain.deployer;
    chain.mint(&staking_token, &deployer, tokens(10_000));
    chain.approve_pool(&staking_token, &deployer);

    chain.send_ok(
        &deployer,
        MultiRewardInstruction::Stake {
            amount: tokens(10_000),
        },
    );
    let claimable = chain.pool().claimable_rewards(&deployer, chain.now()).unwrap();
    assert_eq!(claimable, vec![(token1, 0), (token2, 0)]);
    println!("✓ claimableRewards is zero for every token at stake time");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: a full period with a sole staker
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_sole_staker_full_period() {
    init_logging();
    println!("\n========================================");
    println!("  REWARDS: sole staker, two tokens");
    println!("========================================\n");

    let (mut chain, token1, token2) = funded_chain();
    let alice = chain.funded_staker(tokens(10_000));
    chain.send_ok(
        &alice,
        MultiRewardInstruction::Stake {
            amount: tokens(10_000),
        },
    );

    let mut last = (0, 0);
    for day in 1..=7 {
        chain.advance(DAY);
        let now = chain.now();
        let rpt = (
            chain.pool().reward_per_token(&token1, now).unwrap(),
            chain.pool().reward_per_token(&token2, now).unwrap(),
        );
        assert!(rpt.0 > last.0 && rpt.1 > last.1);
        println!("  Day {day}: rewardPerToken = {rpt:?}");
        last = rpt;
    }

    let events = chain.send_ok(
        &alice,
        MultiRewardInstruction::GetReward {
            tokens: vec![token1, token2],
        },
    );
    assert_eq!(events.len(), 2);
    assert_eq!(chain.balance(&token1, &alice), tokens(10_000) - 1);
    assert_eq!(chain.balance(&token2, &alice), tokens(20_000) - 1);
    println!("✓ Sole staker received both funded amounts minus one unit of dust");

    // The period is over; more time earns nothing.
    chain.advance(WEEK);
    assert_eq!(
        chain.pool().claimable_rewards(&alice, chain.now()).unwrap(),
        vec![(token1, 0), (token2, 0)]
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: snapshot / revert
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_snapshot_and_revert() {
    init_logging();
    let (mut chain, token1, _token2) = funded_chain();
    let alice = chain.funded_staker(tokens(100));
    let pool_before = chain.pool().clone();
    let now_before = chain.now();

    let id = chain.snapshot();
    chain.send_ok(&alice, MultiRewardInstruction::Stake { amount: tokens(100) });
    chain.advance(3 * DAY);
    chain.send_ok(
        &alice,
        MultiRewardInstruction::GetReward {
            tokens: vec![token1],
        },
    );
    assert!(chain.balance(&token1, &alice) > 0);

    chain.revert(id);
    assert_eq!(chain.pool(), &pool_before);
    assert_eq!(chain.now(), now_before);
    assert_eq!(chain.balance(&token1, &alice), 0);
    assert_eq!(chain.balance(&chain.staking_token, &alice), tokens(100));
    println!("✓ Revert restored pool, ledger and clock");

    // Each scenario can branch again from a fresh snapshot.
    let id = chain.snapshot();
    chain.advance(DAY);
    chain.revert(id);
    assert_eq!(chain.now(), now_before);
}
