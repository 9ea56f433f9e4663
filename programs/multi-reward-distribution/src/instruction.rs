//! Instruction definitions for the Multi-Reward Distribution program.
//!
//! All instructions are serialised / deserialised via `bincode` with fixed-int
//! encoding, matching the other built-in programs. Every instruction is
//! executed on behalf of a single caller supplied by the entrypoint.

use {
    crate::constants::MAX_INSTRUCTION_DATA_LEN,
    bincode::Options,
    serde::{Deserialize, Serialize},
    solana_pubkey::Pubkey,
};

/// Instructions supported by the Multi-Reward Distribution program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MultiRewardInstruction {
    /// Register a new reward token.
    ///
    /// Owner only. The staking token is rejected with `ANA`.
    AddReward { token: Pubkey },

    /// Deregister the reward token at `index`, keeping the order of the rest.
    ///
    /// Owner only. Accrual state of the token is discarded.
    RemoveReward { index: u64 },

    /// Fund a new reward period of `rewards_duration` seconds.
    ///
    /// Owner only. Pulls `amount` of `token` from the caller (an allowance
    /// for the pool address is required) and sets
    /// `reward_rate = amount × 1e12 / rewards_duration`.
    NotifyReward { token: Pubkey, amount: u128 },

    /// Overwrite the scaled reward rate of `token` without moving funds.
    ///
    /// Owner only.
    SetRewardRate { token: Pubkey, rate: u128 },

    /// Send `amount` of a stray token held by the pool to the owner.
    ///
    /// Owner only. Neither the staking token nor a reward token with a
    /// positive rate or unclaimed rewards can be recovered.
    RecoverErc20 { token: Pubkey, amount: u128 },

    /// Stake `amount` of the staking token for the caller.
    Stake { amount: u128 },

    /// Stake `amount` of the caller's staking tokens on behalf of
    /// `beneficiary`.
    StakeFor { beneficiary: Pubkey, amount: u128 },

    /// Withdraw `amount` of the caller's stake, optionally claiming every
    /// reward token in the same instruction.
    Withdraw { amount: u128, claim: bool },

    /// Pay the caller's rewards in `tokens` to the caller.
    GetReward { tokens: Vec<Pubkey> },

    /// Pay the caller's rewards in `tokens` to `recipient`.
    GetRewardFor {
        tokens: Vec<Pubkey>,
        recipient: Pubkey,
    },

    /// Hand every owner-gated instruction to `new_owner`.
    ///
    /// Owner only.
    TransferOwnership { new_owner: Pubkey },
}

impl MultiRewardInstruction {
    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddReward { .. } => "AddReward",
            Self::RemoveReward { .. } => "RemoveReward",
            Self::NotifyReward { .. } => "NotifyReward",
            Self::SetRewardRate { .. } => "SetRewardRate",
            Self::RecoverErc20 { .. } => "RecoverErc20",
            Self::Stake { .. } => "Stake",
            Self::StakeFor { .. } => "StakeFor",
            Self::Withdraw { .. } => "Withdraw",
            Self::GetReward { .. } => "GetReward",
            Self::GetRewardFor { .. } => "GetRewardFor",
            Self::TransferOwnership { .. } => "TransferOwnership",
        }
    }

    /// Whether only the pool owner may submit this instruction.
    pub fn is_owner_gated(&self) -> bool {
        matches!(
            self,
            Self::AddReward { .. }
                | Self::RemoveReward { .. }
                | Self::NotifyReward { .. }
                | Self::SetRewardRate { .. }
                | Self::RecoverErc20 { .. }
                | Self::TransferOwnership { .. }
        )
    }

    pub fn serialize(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode_options().serialize(self)
    }
}

fn bincode_options() -> impl Options {
    bincode::options()
        .with_limit(MAX_INSTRUCTION_DATA_LEN)
        .with_fixint_encoding()
        .allow_trailing_bytes()
}

/// Decode instruction data, refusing anything larger than one packet.
pub fn limited_deserialize(data: &[u8]) -> Result<MultiRewardInstruction, bincode::Error> {
    bincode_options().deserialize_from(data)
}
