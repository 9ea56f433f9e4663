//! Pool state for the Multi-Reward Distribution program.

use {
    crate::{
        accrual,
        config::{ConfigError, DistributionConfig},
        error::MultiRewardError,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    log::*,
    serde::{Deserialize, Serialize},
    solana_clock::UnixTimestamp,
    solana_pubkey::Pubkey,
    std::collections::BTreeMap,
};

/// Discriminator byte written at the start of serialized pool data
/// to distinguish it from uninitialized or foreign account data.
pub const MULTI_REWARD_POOL_DISCRIMINATOR: u8 = 1;

/// Accrual state of one reward token.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct RewardData {
    /// Unix timestamp at which the current reward period ends.
    pub period_finish: UnixTimestamp,

    /// Reward units per second, scaled by `RATE_PRECISION`.
    pub reward_rate: u128,

    /// Unix timestamp of the last accrual checkpoint.
    pub last_update_time: UnixTimestamp,

    /// Cumulative reward per staked unit, scaled by
    /// `RATE_PRECISION × SHARE_PRECISION`.
    pub reward_per_token_stored: u128,
}

/// An account's settlement against one reward token.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct RewardCheckpoint {
    /// `reward_per_token_stored` as of the account's last settlement.
    pub reward_per_token_paid: u128,

    /// Settled but unclaimed rewards, scaled by `RATE_PRECISION`.
    pub rewards: u128,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct StakerAccount {
    /// Staking-token principal.
    pub balance: u128,

    /// Per reward token settlement.
    pub checkpoints: BTreeMap<Pubkey, RewardCheckpoint>,
}

impl StakerAccount {
    pub fn checkpoint(&self, reward_token: &Pubkey) -> RewardCheckpoint {
        self.checkpoints
            .get(reward_token)
            .copied()
            .unwrap_or_default()
    }
}

/// A pool that streams any number of reward tokens to the stakers of one
/// staking token.
///
/// There is exactly one pool per deployment; its staked principal and its
/// reward funds are held by `config.pool_address` in the token ledger.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct MultiRewardPool {
    pub config: DistributionConfig,

    /// Sum of every staker's balance.
    pub total_supply: u128,

    /// Registered reward tokens in insertion order.
    pub reward_tokens: Vec<Pubkey>,

    pub reward_data: BTreeMap<Pubkey, RewardData>,

    pub accounts: BTreeMap<Pubkey, StakerAccount>,
}

impl MultiRewardPool {
    /// An empty pool with no reward tokens and nothing staked.
    pub fn new(config: DistributionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            total_supply: 0,
            reward_tokens: Vec::new(),
            reward_data: BTreeMap::new(),
            accounts: BTreeMap::new(),
        })
    }

    // ── Views ────────────────────────────────────────────────────────────

    pub fn owner(&self) -> &Pubkey {
        &self.config.owner
    }

    pub fn staking_token(&self) -> &Pubkey {
        &self.config.staking_token
    }

    pub fn address(&self) -> &Pubkey {
        &self.config.pool_address
    }

    pub fn rewards_duration(&self) -> u64 {
        self.config.rewards_duration
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    pub fn reward_token(&self, index: usize) -> Option<&Pubkey> {
        self.reward_tokens.get(index)
    }

    pub fn reward_token_length(&self) -> usize {
        self.reward_tokens.len()
    }

    pub fn is_reward_token(&self, token: &Pubkey) -> bool {
        self.reward_data.contains_key(token)
    }

    pub fn reward_data(&self, token: &Pubkey) -> Result<&RewardData, MultiRewardError> {
        self.reward_data
            .get(token)
            .ok_or(MultiRewardError::UnknownRewardToken)
    }

    pub fn balance_of(&self, account: &Pubkey) -> u128 {
        self.accounts
            .get(account)
            .map(|staker| staker.balance)
            .unwrap_or_default()
    }

    pub fn user_reward_per_token_paid(&self, account: &Pubkey, token: &Pubkey) -> u128 {
        self.accounts
            .get(account)
            .map(|staker| staker.checkpoint(token).reward_per_token_paid)
            .unwrap_or_default()
    }

    pub fn last_time_reward_applicable(
        &self,
        token: &Pubkey,
        now: UnixTimestamp,
    ) -> Result<UnixTimestamp, MultiRewardError> {
        let data = self.reward_data(token)?;
        Ok(accrual::last_time_reward_applicable(now, data.period_finish))
    }

    pub fn reward_per_token(&self, token: &Pubkey, now: UnixTimestamp) -> Result<u128, MultiRewardError> {
        accrual::reward_per_token(self.reward_data(token)?, self.total_supply, now)
    }

    pub fn reward_for_duration(&self, token: &Pubkey) -> Result<u128, MultiRewardError> {
        accrual::reward_for_duration(self.reward_data(token)?.reward_rate, self.rewards_duration())
    }

    /// Owed rewards of `account` in `token`, scaled by `RATE_PRECISION`.
    pub fn earned(&self, account: &Pubkey, token: &Pubkey, now: UnixTimestamp) -> Result<u128, MultiRewardError> {
        let reward_per_token = self.reward_per_token(token, now)?;
        let Some(staker) = self.accounts.get(account) else {
            return Ok(0);
        };
        let checkpoint = staker.checkpoint(token);
        accrual::earned(
            staker.balance,
            reward_per_token,
            checkpoint.reward_per_token_paid,
            checkpoint.rewards,
        )
    }

    /// Transferable amount of every registered reward token for `account`,
    /// in registration order.
    pub fn claimable_rewards(
        &self,
        account: &Pubkey,
        now: UnixTimestamp,
    ) -> Result<Vec<(Pubkey, u128)>, MultiRewardError> {
        self.reward_tokens
            .iter()
            .map(|token| {
                let owed = self.earned(account, token, now)?;
                Ok((*token, accrual::to_transfer_amount(owed)))
            })
            .collect()
    }

    /// Whole units of `token` still owed to stakers, settled or pending.
    pub fn outstanding_rewards(&self, token: &Pubkey, now: UnixTimestamp) -> Result<u128, MultiRewardError> {
        self.accounts.keys().try_fold(0u128, |total, account| {
            let owed = accrual::to_transfer_amount(self.earned(account, token, now)?);
            total
                .checked_add(owed)
                .ok_or(MultiRewardError::ArithmeticOverflow)
        })
    }

    // ── Settlement ───────────────────────────────────────────────────────

    /// Bring every reward token's accumulator up to `now` and, when given,
    /// settle `account` against it.
    ///
    /// Must run before any change to balances, total supply or rates so that
    /// past accrual is computed against the pre-change values. A settled
    /// account is created if missing, so a first stake starts from the
    /// current accumulator instead of zero.
    pub fn settle(&mut self, account: Option<&Pubkey>, now: UnixTimestamp) -> Result<(), MultiRewardError> {
        for token in &self.reward_tokens {
            let data = self
                .reward_data
                .get_mut(token)
                .ok_or(MultiRewardError::InvalidAccountData)?;
            data.reward_per_token_stored =
                accrual::reward_per_token(data, self.total_supply, now)?;
            data.last_update_time = accrual::last_time_reward_applicable(now, data.period_finish);
            let reward_per_token = data.reward_per_token_stored;

            let Some(key) = account else {
                continue;
            };
            let staker = self.accounts.entry(*key).or_default();
            let checkpoint = staker.checkpoints.entry(*token).or_default();
            checkpoint.rewards = accrual::earned(
                staker.balance,
                reward_per_token,
                checkpoint.reward_per_token_paid,
                checkpoint.rewards,
            )?;
            checkpoint.reward_per_token_paid = reward_per_token;
        }
        if let Some(account) = account {
            debug!("settled {account} against {} reward tokens at {now}", self.reward_tokens.len());
        }
        Ok(())
    }

    /// Drop `account` if it holds no stake and no settled rewards.
    pub fn release_if_empty(&mut self, account: &Pubkey) {
        let empty = self.accounts.get(account).is_some_and(|staker| {
            staker.balance == 0 && staker.checkpoints.values().all(|checkpoint| checkpoint.rewards == 0)
        });
        if empty {
            self.accounts.remove(account);
            debug!("released empty account {account}");
        }
    }

    // ── Account data ─────────────────────────────────────────────────────

    /// Deserialize from raw account data (expects leading discriminator byte).
    pub fn deserialize(data: &[u8]) -> Result<Self, std::io::Error> {
        if data.first() != Some(&MULTI_REWARD_POOL_DISCRIMINATOR) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "missing or invalid multi-reward pool discriminator",
            ));
        }
        let mut cursor = &data[1..];
        BorshDeserialize::deserialize_reader(&mut cursor)
    }

    /// Serialize into a fresh buffer (prepends discriminator byte).
    pub fn serialize(&self) -> Result<Vec<u8>, std::io::Error> {
        let mut data = vec![MULTI_REWARD_POOL_DISCRIMINATOR];
        BorshSerialize::serialize(self, &mut data)?;
        Ok(data)
    }
}
