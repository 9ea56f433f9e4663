//! Fungible token ledger used as the pool's source and sink of funds.
//!
//! The pool never touches balances directly; it goes through [`TokenBank`],
//! which follows ERC-20 semantics: `transfer` moves the caller's own tokens,
//! `transfer_from` spends an allowance granted with `approve`. An allowance of
//! `u128::MAX` is treated as unlimited and is never decremented.

use {
    crate::constants::DEFAULT_DECIMALS,
    borsh::{BorshDeserialize, BorshSerialize},
    log::*,
    solana_pubkey::Pubkey,
    std::collections::BTreeMap,
    thiserror::Error,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("ERC20: unknown token")]
    UnknownMint,

    #[error("ERC20: transfer amount exceeds balance")]
    InsufficientBalance,

    #[error("ERC20: insufficient allowance")]
    InsufficientAllowance,

    #[error("ERC20: arithmetic overflow")]
    ArithmeticOverflow,
}

/// Token operations the pool relies on.
pub trait TokenBank {
    fn balance_of(&self, mint: &Pubkey, owner: &Pubkey) -> Result<u128, TokenError>;

    /// Move `amount` of `mint` from `from` to `to`, authorised by `from`.
    fn transfer(
        &mut self,
        mint: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), TokenError>;

    /// Move `amount` of `mint` from `from` to `to`, spending the allowance
    /// `from` granted to `spender`.
    fn transfer_from(
        &mut self,
        mint: &Pubkey,
        spender: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), TokenError>;
}

/// A single mintable token.
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Mint {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub total_supply: u128,
    pub balances: BTreeMap<Pubkey, u128>,
    /// `(owner, spender) → remaining allowance`.
    pub allowances: BTreeMap<(Pubkey, Pubkey), u128>,
}

impl Mint {
    pub fn new(name: &str, symbol: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: DEFAULT_DECIMALS,
            ..Self::default()
        }
    }

    pub fn balance_of(&self, owner: &Pubkey) -> u128 {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u128 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn move_balance(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<(), TokenError> {
        let from_balance = self.balance_of(from);
        let remaining = from_balance
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance)?;
        self.balances.insert(*from, remaining);

        let to_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;
        self.balances.insert(*to, to_balance);
        Ok(())
    }

    fn spend_allowance(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u128) -> Result<(), TokenError> {
        let current = self.allowance(owner, spender);
        if current == u128::MAX {
            return Ok(());
        }
        let remaining = current
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientAllowance)?;
        self.allowances.insert((*owner, *spender), remaining);
        Ok(())
    }
}

/// In-memory multi-mint ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct TokenLedger {
    mints: BTreeMap<Pubkey, Mint>,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploy a new token at a fresh address.
    pub fn create_mint(&mut self, name: &str, symbol: &str) -> Pubkey {
        let address = Pubkey::new_unique();
        self.mints.insert(address, Mint::new(name, symbol));
        debug!("created token {symbol} at {address}");
        address
    }

    /// Deploy a token at a well-known address. Returns `false` when a token
    /// already lives there.
    pub fn create_mint_at(&mut self, address: Pubkey, name: &str, symbol: &str) -> bool {
        if self.mints.contains_key(&address) {
            return false;
        }
        self.mints.insert(address, Mint::new(name, symbol));
        debug!("created token {symbol} at {address}");
        true
    }

    pub fn mint(&self, address: &Pubkey) -> Option<&Mint> {
        self.mints.get(address)
    }

    fn mint_mut(&mut self, address: &Pubkey) -> Result<&mut Mint, TokenError> {
        self.mints.get_mut(address).ok_or(TokenError::UnknownMint)
    }

    /// Create `amount` new tokens in `to`'s balance.
    pub fn mint_to(&mut self, mint: &Pubkey, to: &Pubkey, amount: u128) -> Result<(), TokenError> {
        let token = self.mint_mut(mint)?;
        token.total_supply = token
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;
        let balance = token
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;
        token.balances.insert(*to, balance);
        Ok(())
    }

    pub fn approve(
        &mut self,
        mint: &Pubkey,
        owner: &Pubkey,
        spender: &Pubkey,
        amount: u128,
    ) -> Result<(), TokenError> {
        self.mint_mut(mint)?
            .allowances
            .insert((*owner, *spender), amount);
        Ok(())
    }

    pub fn allowance(&self, mint: &Pubkey, owner: &Pubkey, spender: &Pubkey) -> Result<u128, TokenError> {
        self.mints
            .get(mint)
            .map(|token| token.allowance(owner, spender))
            .ok_or(TokenError::UnknownMint)
    }

    pub fn total_supply(&self, mint: &Pubkey) -> Result<u128, TokenError> {
        self.mints
            .get(mint)
            .map(|token| token.total_supply)
            .ok_or(TokenError::UnknownMint)
    }
}

impl TokenBank for TokenLedger {
    fn balance_of(&self, mint: &Pubkey, owner: &Pubkey) -> Result<u128, TokenError> {
        self.mints
            .get(mint)
            .map(|token| token.balance_of(owner))
            .ok_or(TokenError::UnknownMint)
    }

    fn transfer(
        &mut self,
        mint: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), TokenError> {
        trace!("transfer {amount} of {mint}: {from} -> {to}");
        self.mint_mut(mint)?.move_balance(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        mint: &Pubkey,
        spender: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), TokenError> {
        trace!("transfer_from {amount} of {mint} by {spender}: {from} -> {to}");
        let token = self.mint_mut(mint)?;
        // A failed transfer must not consume allowance.
        if token.balance_of(from) < amount {
            return Err(TokenError::InsufficientBalance);
        }
        token.spend_allowance(from, spender, amount)?;
        token.move_balance(from, to, amount)
    }
}
