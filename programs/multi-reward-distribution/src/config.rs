use {
    crate::constants::DEFAULT_REWARDS_DURATION,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    solana_pubkey::Pubkey,
};

/// Deployment parameters of a distribution pool.
///
/// Everything here is fixed for the life of the pool except `owner`, which
/// can move with `TransferOwnership`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct DistributionConfig {
    /// Authority for every owner-gated instruction.
    pub owner: Pubkey,

    /// The single token stakers deposit.
    pub staking_token: Pubkey,

    /// Address holding the pool's staked principal and reward funds.
    pub pool_address: Pubkey,

    /// Length in seconds of the period funded by one `NotifyReward`.
    /// Default: 604 800 (7 days).
    pub rewards_duration: u64,
}

impl DistributionConfig {
    pub fn new(owner: Pubkey, staking_token: Pubkey, pool_address: Pubkey) -> Self {
        Self {
            owner,
            staking_token,
            pool_address,
            ..Self::default()
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rewards_duration == 0 {
            return Err(ConfigError::ZeroRewardsDuration);
        }
        if self.staking_token == Pubkey::default() {
            return Err(ConfigError::MissingStakingToken);
        }
        if self.pool_address == self.staking_token {
            return Err(ConfigError::PoolAddressIsStakingToken);
        }
        Ok(())
    }
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            owner: Pubkey::default(),
            staking_token: Pubkey::default(),
            pool_address: Pubkey::default(),
            rewards_duration: DEFAULT_REWARDS_DURATION,
        }
    }
}

/// Errors in distribution configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("rewards_duration must be > 0")]
    ZeroRewardsDuration,
    #[error("staking_token must be set")]
    MissingStakingToken,
    #[error("pool_address must differ from staking_token")]
    PoolAddressIsStakingToken,
}
