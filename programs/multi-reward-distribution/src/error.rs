//! Custom errors for the Multi-Reward Distribution program.
//!
//! `Display` renders the revert string a caller observes, so the short codes
//! (`ANA`, `AGB`) are kept verbatim.

use {
    crate::token::TokenError,
    num_derive::{FromPrimitive, ToPrimitive},
    thiserror::Error,
};

#[derive(Error, Debug, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum MultiRewardError {
    // ── Authority ────────────────────────────────────────────────────────
    #[error("Ownable: caller is not the owner")]
    NotOwner = 0,

    // ── Reward token registry ────────────────────────────────────────────
    /// The staking token cannot double as a reward token.
    #[error("ANA")]
    StakingTokenAsReward = 1,

    #[error("Reward token already added")]
    RewardTokenAlreadyAdded = 2,

    #[error("Invalid reward token index")]
    InvalidRewardIndex = 3,

    #[error("Unknown reward token")]
    UnknownRewardToken = 4,

    // ── Recovery ─────────────────────────────────────────────────────────
    #[error("Cannot withdraw staking token")]
    CannotWithdrawStakingToken = 5,

    #[error("Cannot withdraw reward token")]
    CannotWithdrawRewardToken = 6,

    // ── Staking ──────────────────────────────────────────────────────────
    #[error("Cannot stake 0")]
    ZeroStake = 7,

    /// Zero-amount withdrawal.
    #[error("AGB")]
    ZeroWithdraw = 8,

    #[error("Insufficient staked balance")]
    InsufficientStakedBalance = 9,

    // ── Plumbing ─────────────────────────────────────────────────────────
    #[error("Arithmetic overflow in reward accounting")]
    ArithmeticOverflow = 10,

    #[error("Invalid instruction data")]
    InvalidInstructionData = 11,

    #[error("Pool account data is invalid or corrupted")]
    InvalidAccountData = 12,

    // ── Token ledger ─────────────────────────────────────────────────────
    #[error("ERC20: unknown token")]
    UnknownToken = 13,

    #[error("ERC20: transfer amount exceeds balance")]
    TokenInsufficientBalance = 14,

    #[error("ERC20: insufficient allowance")]
    TokenInsufficientAllowance = 15,
}

impl From<TokenError> for MultiRewardError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::UnknownMint => Self::UnknownToken,
            TokenError::InsufficientBalance => Self::TokenInsufficientBalance,
            TokenError::InsufficientAllowance => Self::TokenInsufficientAllowance,
            TokenError::ArithmeticOverflow => Self::ArithmeticOverflow,
        }
    }
}
