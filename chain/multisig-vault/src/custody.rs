//! Custody: asset balances held by vaults and accounts
//!
//! The engine only needs two primitives from custody: a balance query and an
//! all-or-nothing transfer out of a vault. Deposits are plain credits.

use multisig_types::ids::{SignerId, VaultId};
use multisig_types::proposal::Asset;
use std::collections::HashMap;

use crate::errors::CustodyError;

/// Owner of a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holder {
    Vault(VaultId),
    Account(SignerId),
}

/// Asset custody primitives.
pub trait Custody {
    /// Current balance of `asset` held by `holder`. Unknown holders hold zero.
    fn balance(&self, holder: &Holder, asset: &Asset) -> u64;

    /// Unconditionally add `amount` to `holder`.
    fn credit(&mut self, holder: Holder, asset: &Asset, amount: u64) -> Result<(), CustodyError>;

    /// Move `amount` from the vault to `recipient`. Either both sides are
    /// updated or neither is.
    fn transfer(
        &mut self,
        vault: &VaultId,
        recipient: &SignerId,
        asset: &Asset,
        amount: u64,
    ) -> Result<(), CustodyError>;
}

/// In-memory custody ledger.
///
/// Balances are stored as `HashMap<Holder, HashMap<Asset, u64>>`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustody {
    balances: HashMap<Holder, HashMap<Asset, u64>>,
}

impl InMemoryCustody {
    pub fn new() -> Self {
        Self::default()
    }

    /// All balances of a holder.
    pub fn holdings(&self, holder: &Holder) -> Option<&HashMap<Asset, u64>> {
        self.balances.get(holder)
    }

    /// Sum of `asset` across every holder.
    pub fn total_supply(&self, asset: &Asset) -> u128 {
        self.balances
            .values()
            .filter_map(|assets| assets.get(asset))
            .map(|amount| *amount as u128)
            .sum()
    }

    fn checked_credit(&self, holder: &Holder, asset: &Asset, amount: u64) -> Result<u64, CustodyError> {
        self.balance(holder, asset)
            .checked_add(amount)
            .ok_or(CustodyError::Overflow)
    }

    fn checked_debit(&self, holder: &Holder, asset: &Asset, amount: u64) -> Result<u64, CustodyError> {
        let available = self.balance(holder, asset);
        available
            .checked_sub(amount)
            .ok_or_else(|| CustodyError::InsufficientBalance {
                asset: asset.clone(),
                required: amount,
                available,
            })
    }

    fn set(&mut self, holder: Holder, asset: &Asset, amount: u64) {
        self.balances
            .entry(holder)
            .or_default()
            .insert(asset.clone(), amount);
    }
}

impl Custody for InMemoryCustody {
    fn balance(&self, holder: &Holder, asset: &Asset) -> u64 {
        self.balances
            .get(holder)
            .and_then(|assets| assets.get(asset))
            .copied()
            .unwrap_or(0)
    }

    fn credit(&mut self, holder: Holder, asset: &Asset, amount: u64) -> Result<(), CustodyError> {
        let new_balance = self.checked_credit(&holder, asset, amount)?;
        self.set(holder, asset, new_balance);
        Ok(())
    }

    fn transfer(
        &mut self,
        vault: &VaultId,
        recipient: &SignerId,
        asset: &Asset,
        amount: u64,
    ) -> Result<(), CustodyError> {
        let from = Holder::Vault(*vault);
        let to = Holder::Account(*recipient);

        // Compute both sides before writing either
        let from_balance = self.checked_debit(&from, asset, amount)?;
        let to_balance = self.checked_credit(&to, asset, amount)?;

        self.set(from, asset, from_balance);
        self.set(to, asset, to_balance);
        Ok(())
    }
}
