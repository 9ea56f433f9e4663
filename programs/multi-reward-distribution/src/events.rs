//! Notifications emitted by successful instructions.

use {
    serde::{Deserialize, Serialize},
    solana_pubkey::Pubkey,
    std::fmt,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MultiRewardEvent {
    RewardTokenAdded {
        token: Pubkey,
    },
    RewardTokenRemoved {
        index: u64,
        token: Pubkey,
    },
    /// A reward period was funded.
    RewardAdded {
        token: Pubkey,
        amount: u128,
    },
    /// Rates are in the scaled domain.
    RateChanged {
        token: Pubkey,
        old_rate: u128,
        new_rate: u128,
    },
    Recovered {
        token: Pubkey,
        amount: u128,
    },
    Staked {
        payer: Pubkey,
        beneficiary: Pubkey,
        amount: u128,
    },
    Withdrawn {
        account: Pubkey,
        amount: u128,
    },
    RewardPaid {
        caller: Pubkey,
        recipient: Pubkey,
        token: Pubkey,
        amount: u128,
    },
    OwnershipTransferred {
        previous_owner: Pubkey,
        new_owner: Pubkey,
    },
}

impl fmt::Display for MultiRewardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RewardTokenAdded { token } => write!(f, "RewardTokenAdded({token})"),
            Self::RewardTokenRemoved { index, token } => {
                write!(f, "RewardTokenRemoved({index}, {token})")
            }
            Self::RewardAdded { token, amount } => write!(f, "RewardAdded({token}, {amount})"),
            Self::RateChanged {
                token,
                old_rate,
                new_rate,
            } => write!(f, "RateChanged({token}, {old_rate}, {new_rate})"),
            Self::Recovered { token, amount } => write!(f, "Recovered({token}, {amount})"),
            Self::Staked {
                payer,
                beneficiary,
                amount,
            } => write!(f, "Staked({payer}, {beneficiary}, {amount})"),
            Self::Withdrawn { account, amount } => write!(f, "Withdrawn({account}, {amount})"),
            Self::RewardPaid {
                caller,
                recipient,
                token,
                amount,
            } => write!(f, "RewardPaid({caller}, {recipient}, {token}, {amount})"),
            Self::OwnershipTransferred {
                previous_owner,
                new_owner,
            } => write!(f, "OwnershipTransferred({previous_owner}, {new_owner})"),
        }
    }
}
