//! # TRv1 Multi-Reward Distribution
//!
//! A staking pool that streams **several reward tokens at once** to the
//! holders of a single staking token. Each funded reward token pays out at a
//! constant rate over a fixed reward period (7 days by default), split
//! pro-rata to staked balances.
//!
//! ## Accounting
//!
//! Every reward token keeps a cumulative *reward per staked unit*; every
//! staker keeps, per reward token, the value of that accumulator at their
//! last settlement plus the rewards already settled. Before any instruction
//! changes balances or rates the pool is settled, so past accrual is always
//! computed against the old values. See [`accrual`] for the formulas and the
//! two layered precision factors.
//!
//! ## Instructions
//!
//! | Instruction        | Caller | Description                                      |
//! |--------------------|--------|--------------------------------------------------|
//! | AddReward          | owner  | Register a reward token                          |
//! | RemoveReward       | owner  | Deregister a reward token by index               |
//! | NotifyReward       | owner  | Fund a new reward period                         |
//! | SetRewardRate      | owner  | Overwrite a reward rate                          |
//! | RecoverErc20       | owner  | Send a stray token to the owner                  |
//! | TransferOwnership  | owner  | Hand over the owner role                         |
//! | Stake / StakeFor   | anyone | Deposit staking tokens for self or a beneficiary |
//! | Withdraw           | staker | Withdraw stake, optionally claiming rewards      |
//! | GetReward(For)     | staker | Claim rewards to self or a recipient             |
//!
//! ## Quick start
//!
//! ```rust
//! use {
//!     solana_clock::Clock,
//!     solana_pubkey::Pubkey,
//!     trv1_multi_reward_distribution_program::{
//!         processor::process_instruction, DistributionConfig, MultiRewardInstruction,
//!         MultiRewardPool, TokenLedger,
//!     },
//! };
//!
//! let mut ledger = TokenLedger::new();
//! let staking_token = ledger.create_mint("Staking", "STK");
//! let owner = Pubkey::new_unique();
//! let config = DistributionConfig::new(owner, staking_token, Pubkey::new_unique());
//! let mut pool = MultiRewardPool::new(config).unwrap();
//!
//! let reward_token = ledger.create_mint("Reward", "RWD");
//! let data = MultiRewardInstruction::AddReward { token: reward_token }
//!     .serialize()
//!     .unwrap();
//! process_instruction(&mut pool, &mut ledger, &owner, &Clock::default(), &data).unwrap();
//! assert_eq!(pool.reward_token_length(), 1);
//! ```

#![allow(clippy::arithmetic_side_effects)]

pub mod accrual;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod instruction;
pub mod processor;
pub mod state;
pub mod token;
pub mod units;


// Re-exports for convenience.
pub use {
    config::{ConfigError, DistributionConfig},
    error::MultiRewardError,
    events::MultiRewardEvent,
    instruction::MultiRewardInstruction,
    processor::process_instruction,
    state::{MultiRewardPool, RewardCheckpoint, RewardData, StakerAccount},
    token::{TokenBank, TokenError, TokenLedger},
};
