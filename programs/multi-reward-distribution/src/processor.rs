//! Instruction processing logic for the Multi-Reward Distribution program.

use {
    crate::{
        accrual,
        error::MultiRewardError,
        events::MultiRewardEvent,
        instruction::{limited_deserialize, MultiRewardInstruction},
        state::{MultiRewardPool, RewardData},
        token::TokenBank,
    },
    log::*,
    solana_clock::{Clock, UnixTimestamp},
    solana_pubkey::Pubkey,
};

// ---------------------------------------------------------------------------
// Entrypoint
// ---------------------------------------------------------------------------

/// Decode and execute one instruction on behalf of `caller`.
///
/// The instruction runs against staged copies of `pool` and `tokens`; both
/// are written back only when it succeeds, so a failed instruction leaves
/// them untouched. Returns the emitted events in order.
pub fn process_instruction<T: TokenBank + Clone>(
    pool: &mut MultiRewardPool,
    tokens: &mut T,
    caller: &Pubkey,
    clock: &Clock,
    instruction_data: &[u8],
) -> Result<Vec<MultiRewardEvent>, MultiRewardError> {
    let instruction = limited_deserialize(instruction_data).map_err(|err| {
        debug!("multi-reward: cannot decode instruction: {err}");
        MultiRewardError::InvalidInstructionData
    })?;

    trace!("multi-reward process_instruction: {instruction:?}");

    if instruction.is_owner_gated() && caller != pool.owner() {
        warn!(
            "{}: caller {caller} is not the owner {}",
            instruction.name(),
            pool.owner()
        );
        return Err(MultiRewardError::NotOwner);
    }

    let mut staged_pool = pool.clone();
    let mut staged_tokens = tokens.clone();
    let mut ctx = ProcessContext {
        pool: &mut staged_pool,
        tokens: &mut staged_tokens,
        caller: *caller,
        now: clock.unix_timestamp,
        events: Vec::new(),
    };

    // Accrual is always checkpointed before the handler touches balances or
    // rates.
    let target = settle_target(&instruction, caller).copied();
    ctx.pool.settle(target.as_ref(), ctx.now)?;

    let name = instruction.name();
    let result = match instruction {
        MultiRewardInstruction::AddReward { token } => process_add_reward(&mut ctx, token),
        MultiRewardInstruction::RemoveReward { index } => process_remove_reward(&mut ctx, index),
        MultiRewardInstruction::NotifyReward { token, amount } => {
            process_notify_reward(&mut ctx, token, amount)
        }
        MultiRewardInstruction::SetRewardRate { token, rate } => {
            process_set_reward_rate(&mut ctx, token, rate)
        }
        MultiRewardInstruction::RecoverErc20 { token, amount } => {
            process_recover_erc20(&mut ctx, token, amount)
        }
        MultiRewardInstruction::Stake { amount } => process_stake(&mut ctx, *caller, amount),
        MultiRewardInstruction::StakeFor {
            beneficiary,
            amount,
        } => process_stake(&mut ctx, beneficiary, amount),
        MultiRewardInstruction::Withdraw { amount, claim } => {
            process_withdraw(&mut ctx, amount, claim)
        }
        MultiRewardInstruction::GetReward { tokens } => {
            process_get_reward(&mut ctx, &tokens, *caller)
        }
        MultiRewardInstruction::GetRewardFor { tokens, recipient } => {
            process_get_reward(&mut ctx, &tokens, recipient)
        }
        MultiRewardInstruction::TransferOwnership { new_owner } => {
            process_transfer_ownership(&mut ctx, new_owner)
        }
    };

    if let Err(err) = result {
        debug!("{name} by {caller} failed: {err}");
        return Err(err);
    }

    if let Some(account) = target {
        ctx.pool.release_if_empty(&account);
    }
    let events = ctx.events;
    for event in &events {
        info!("{event}");
    }
    *pool = staged_pool;
    *tokens = staged_tokens;
    Ok(events)
}

/// The account whose checkpoints must be settled before the instruction runs.
fn settle_target<'a>(instruction: &'a MultiRewardInstruction, caller: &'a Pubkey) -> Option<&'a Pubkey> {
    match instruction {
        MultiRewardInstruction::StakeFor { beneficiary, .. } => Some(beneficiary),
        MultiRewardInstruction::Stake { .. }
        | MultiRewardInstruction::Withdraw { .. }
        | MultiRewardInstruction::GetReward { .. }
        | MultiRewardInstruction::GetRewardFor { .. } => Some(caller),
        MultiRewardInstruction::AddReward { .. }
        | MultiRewardInstruction::RemoveReward { .. }
        | MultiRewardInstruction::NotifyReward { .. }
        | MultiRewardInstruction::SetRewardRate { .. }
        | MultiRewardInstruction::RecoverErc20 { .. }
        | MultiRewardInstruction::TransferOwnership { .. } => None,
    }
}

struct ProcessContext<'a, T> {
    pool: &'a mut MultiRewardPool,
    tokens: &'a mut T,
    caller: Pubkey,
    now: UnixTimestamp,
    events: Vec<MultiRewardEvent>,
}

// ---------------------------------------------------------------------------
// Reward token registry
// ---------------------------------------------------------------------------

fn process_add_reward<T: TokenBank>(
    ctx: &mut ProcessContext<T>,
    token: Pubkey,
) -> Result<(), MultiRewardError> {
    if token == *ctx.pool.staking_token() {
        return Err(MultiRewardError::StakingTokenAsReward);
    }
    if ctx.pool.is_reward_token(&token) {
        return Err(MultiRewardError::RewardTokenAlreadyAdded);
    }
    ctx.pool.reward_tokens.push(token);
    ctx.pool.reward_data.insert(token, RewardData::default());
    ctx.events.push(MultiRewardEvent::RewardTokenAdded { token });
    Ok(())
}

fn process_remove_reward<T: TokenBank>(
    ctx: &mut ProcessContext<T>,
    index: u64,
) -> Result<(), MultiRewardError> {
    let position = usize::try_from(index)
        .ok()
        .filter(|position| *position < ctx.pool.reward_token_length())
        .ok_or(MultiRewardError::InvalidRewardIndex)?;
    let token = ctx.pool.reward_tokens.remove(position);
    ctx.pool.reward_data.remove(&token);
    for staker in ctx.pool.accounts.values_mut() {
        staker.checkpoints.remove(&token);
    }
    ctx.events
        .push(MultiRewardEvent::RewardTokenRemoved { index, token });
    Ok(())
}

// ---------------------------------------------------------------------------
// Funding
// ---------------------------------------------------------------------------

fn process_notify_reward<T: TokenBank>(
    ctx: &mut ProcessContext<T>,
    token: Pubkey,
    amount: u128,
) -> Result<(), MultiRewardError> {
    let pool_address = *ctx.pool.address();
    let duration = ctx.pool.rewards_duration();
    let period_finish = i64::try_from(duration)
        .ok()
        .and_then(|duration| ctx.now.checked_add(duration))
        .ok_or(MultiRewardError::ArithmeticOverflow)?;
    let reward_rate = accrual::notify_rate(amount, duration)?;

    let data = ctx
        .pool
        .reward_data
        .get_mut(&token)
        .ok_or(MultiRewardError::UnknownRewardToken)?;
    ctx.tokens
        .transfer_from(&token, &pool_address, &ctx.caller, &pool_address, amount)?;

    data.reward_rate = reward_rate;
    data.last_update_time = ctx.now;
    data.period_finish = period_finish;

    ctx.events
        .push(MultiRewardEvent::RewardAdded { token, amount });
    Ok(())
}

fn process_set_reward_rate<T: TokenBank>(
    ctx: &mut ProcessContext<T>,
    token: Pubkey,
    rate: u128,
) -> Result<(), MultiRewardError> {
    let data = ctx
        .pool
        .reward_data
        .get_mut(&token)
        .ok_or(MultiRewardError::UnknownRewardToken)?;
    let old_rate = data.reward_rate;
    data.reward_rate = rate;
    ctx.events.push(MultiRewardEvent::RateChanged {
        token,
        old_rate,
        new_rate: rate,
    });
    Ok(())
}

fn process_recover_erc20<T: TokenBank>(
    ctx: &mut ProcessContext<T>,
    token: Pubkey,
    amount: u128,
) -> Result<(), MultiRewardError> {
    if token == *ctx.pool.staking_token() {
        return Err(MultiRewardError::CannotWithdrawStakingToken);
    }
    if let Some(data) = ctx.pool.reward_data.get(&token) {
        if data.reward_rate > 0 || ctx.pool.outstanding_rewards(&token, ctx.now)? > 0 {
            return Err(MultiRewardError::CannotWithdrawRewardToken);
        }
    }
    let pool_address = *ctx.pool.address();
    let owner = *ctx.pool.owner();
    ctx.tokens.transfer(&token, &pool_address, &owner, amount)?;
    ctx.events.push(MultiRewardEvent::Recovered { token, amount });
    Ok(())
}

fn process_transfer_ownership<T: TokenBank>(
    ctx: &mut ProcessContext<T>,
    new_owner: Pubkey,
) -> Result<(), MultiRewardError> {
    let previous_owner = ctx.pool.config.owner;
    ctx.pool.config.owner = new_owner;
    ctx.events.push(MultiRewardEvent::OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    Ok(())
}

// ---------------------------------------------------------------------------
// Staking
// ---------------------------------------------------------------------------

fn process_stake<T: TokenBank>(
    ctx: &mut ProcessContext<T>,
    beneficiary: Pubkey,
    amount: u128,
) -> Result<(), MultiRewardError> {
    if amount == 0 {
        return Err(MultiRewardError::ZeroStake);
    }
    let staking_token = *ctx.pool.staking_token();
    let pool_address = *ctx.pool.address();
    ctx.tokens
        .transfer_from(&staking_token, &pool_address, &ctx.caller, &pool_address, amount)?;

    ctx.pool.total_supply = ctx
        .pool
        .total_supply
        .checked_add(amount)
        .ok_or(MultiRewardError::ArithmeticOverflow)?;
    let staker = ctx.pool.accounts.entry(beneficiary).or_default();
    staker.balance = staker
        .balance
        .checked_add(amount)
        .ok_or(MultiRewardError::ArithmeticOverflow)?;

    ctx.events.push(MultiRewardEvent::Staked {
        payer: ctx.caller,
        beneficiary,
        amount,
    });
    Ok(())
}

fn process_withdraw<T: TokenBank>(
    ctx: &mut ProcessContext<T>,
    amount: u128,
    claim: bool,
) -> Result<(), MultiRewardError> {
    if amount == 0 {
        return Err(MultiRewardError::ZeroWithdraw);
    }
    let caller = ctx.caller;
    let staker = ctx
        .pool
        .accounts
        .get_mut(&caller)
        .filter(|staker| staker.balance >= amount)
        .ok_or(MultiRewardError::InsufficientStakedBalance)?;
    staker.balance -= amount;
    ctx.pool.total_supply = ctx
        .pool
        .total_supply
        .checked_sub(amount)
        .ok_or(MultiRewardError::InvalidAccountData)?;

    let staking_token = *ctx.pool.staking_token();
    let pool_address = *ctx.pool.address();
    ctx.tokens
        .transfer(&staking_token, &pool_address, &caller, amount)?;
    ctx.events.push(MultiRewardEvent::Withdrawn {
        account: caller,
        amount,
    });

    if claim {
        let reward_tokens = ctx.pool.reward_tokens.clone();
        process_get_reward(ctx, &reward_tokens, caller)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Claiming
// ---------------------------------------------------------------------------

/// Pay the caller's settled rewards in each of `reward_tokens` to
/// `recipient`. Only whole units move; the scaled remainder stays owed.
fn process_get_reward<T: TokenBank>(
    ctx: &mut ProcessContext<T>,
    reward_tokens: &[Pubkey],
    recipient: Pubkey,
) -> Result<(), MultiRewardError> {
    let caller = ctx.caller;
    let pool_address = *ctx.pool.address();
    for token in reward_tokens {
        if !ctx.pool.is_reward_token(token) {
            return Err(MultiRewardError::UnknownRewardToken);
        }
        let checkpoint = ctx
            .pool
            .accounts
            .get_mut(&caller)
            .and_then(|staker| staker.checkpoints.get_mut(token))
            .ok_or(MultiRewardError::InvalidAccountData)?;
        let amount = accrual::to_transfer_amount(checkpoint.rewards);
        if amount == 0 {
            continue;
        }
        checkpoint.rewards -= accrual::to_scaled_amount(amount)?;

        ctx.tokens.transfer(token, &pool_address, &recipient, amount)?;
        ctx.events.push(MultiRewardEvent::RewardPaid {
            caller,
            recipient,
            token: *token,
            amount,
        });
    }
    Ok(())
}
