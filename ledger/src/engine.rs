//! The accrual ledger engine.
//!
//! One engine instance is one sequentially-consistent state machine: every
//! operation runs to completion against `&mut self`, and a failed operation
//! leaves state exactly as before it started. Operations therefore validate
//! every fallible step (authorization, balance, checked arithmetic) before
//! the first mutation.

use std::collections::HashMap;

use crate::access::CapabilityRegistry;
use crate::account::Account;
use crate::custody::AssetCustody;
use crate::error::LedgerError;
use rbx_store::{AccountStore, MetaStore, StoreError};
use rbx_types::{AccountAddress, LedgerEvent, Rate, Timestamp};

/// Sentinel amount meaning "the account's entire current balance".
pub const AMOUNT_MAX: u128 = u128::MAX;

const META_TOTAL_SUPPLY: &[u8] = b"total_supply";
const META_CAPABILITIES: &[u8] = b"capabilities";

/// The account ledger: stored principals, locked rates, lazy accrual.
pub struct AccrualLedger {
    accounts: HashMap<AccountAddress, Account>,
    access: CapabilityRegistry,
    /// Sum of all principals. Grows on mint and interest materialization,
    /// shrinks on burn; a transfer leaves it unchanged.
    total_supply: u128,
    events: Vec<LedgerEvent>,
}

impl AccrualLedger {
    pub fn new(admin: AccountAddress) -> Self {
        Self {
            accounts: HashMap::new(),
            access: CapabilityRegistry::new(admin),
            total_supply: 0,
            events: Vec::new(),
        }
    }

    // ── Pure reads ───────────────────────────────────────────────────────

    /// The accrued, externally observable balance at `now`. Zero for
    /// accounts that were never credited.
    pub fn balance_of(&self, address: &AccountAddress, now: Timestamp) -> Result<u128, LedgerError> {
        match self.accounts.get(address) {
            Some(acct) => acct
                .projected_balance_checked(now)
                .ok_or(LedgerError::Overflow),
            None => Ok(0),
        }
    }

    /// The stored principal, excluding unmaterialized interest.
    pub fn principal_of(&self, address: &AccountAddress) -> u128 {
        self.accounts.get(address).map_or(0, |a| a.principal)
    }

    /// The account's locked rate, if it was ever credited.
    pub fn rate_of(&self, address: &AccountAddress) -> Option<Rate> {
        self.accounts.get(address).map(|a| a.locked_rate)
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    pub fn account(&self, address: &AccountAddress) -> Option<&Account> {
        self.accounts.get(address)
    }

    pub fn access(&self) -> &CapabilityRegistry {
        &self.access
    }

    /// Whether `caller` may spend from `owner`'s account.
    pub fn authorize_spend(
        &self,
        caller: &AccountAddress,
        owner: &AccountAddress,
    ) -> Result<(), LedgerError> {
        self.access.check_owner_or_delegate(caller, owner)
    }

    // ── Administration ───────────────────────────────────────────────────

    pub fn grant_mint_and_burn(
        &mut self,
        caller: &AccountAddress,
        grantee: &AccountAddress,
    ) -> Result<(), LedgerError> {
        self.access.grant_mint_and_burn(caller, grantee)
    }

    pub fn revoke_mint_and_burn(
        &mut self,
        caller: &AccountAddress,
        grantee: &AccountAddress,
    ) -> Result<(), LedgerError> {
        self.access.revoke_mint_and_burn(caller, grantee)
    }

    pub fn approve_delegate(&mut self, owner: &AccountAddress, delegate: &AccountAddress) {
        self.access.approve_delegate(owner, delegate);
    }

    pub fn revoke_delegate(&mut self, owner: &AccountAddress, delegate: &AccountAddress) {
        self.access.revoke_delegate(owner, delegate);
    }

    // ── Mutators ─────────────────────────────────────────────────────────

    /// Credit `amount` new units to `address`, materializing pending
    /// interest first. A fresh or fully drained account locks in
    /// `rate_for_new_account`; a non-zero account keeps its own rate.
    ///
    /// Requires the mint-and-burn capability. Returns the interest
    /// materialized as a side effect.
    pub fn mint(
        &mut self,
        caller: &AccountAddress,
        address: &AccountAddress,
        amount: u128,
        rate_for_new_account: Rate,
        now: Timestamp,
    ) -> Result<u128, LedgerError> {
        self.access.check_mint_and_burn(caller)?;
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }

        // Validate every arithmetic step before mutating anything.
        let (principal, projected) = match self.accounts.get(address) {
            Some(acct) => (
                acct.principal,
                acct.projected_balance_checked(now)
                    .ok_or(LedgerError::Overflow)?,
            ),
            None => (0, 0),
        };
        let interest = projected - principal;
        let new_principal = projected.checked_add(amount).ok_or(LedgerError::Overflow)?;
        let new_supply = self
            .total_supply
            .checked_add(interest)
            .and_then(|s| s.checked_add(amount))
            .ok_or(LedgerError::Overflow)?;

        let acct = self
            .accounts
            .entry(address.clone())
            .or_insert_with(|| Account::new(rate_for_new_account, now));
        // Cannot fail: the same projection was validated above.
        acct.materialize(now).ok_or(LedgerError::Overflow)?;
        if projected == 0 {
            acct.locked_rate = rate_for_new_account;
        }
        acct.principal = new_principal;
        self.total_supply = new_supply;

        self.record_interest(address, interest);
        self.events.push(LedgerEvent::Minted {
            account: address.clone(),
            amount,
        });
        tracing::info!(account = %address, amount, "minted");
        Ok(interest)
    }

    /// Debit `amount` units from `address`, materializing pending interest
    /// first — a burn can draw on interest accrued in the same call.
    /// [`AMOUNT_MAX`] drains the full current balance.
    ///
    /// Requires the mint-and-burn capability. Returns the resolved amount
    /// actually burned.
    pub fn burn(
        &mut self,
        caller: &AccountAddress,
        address: &AccountAddress,
        amount: u128,
        now: Timestamp,
    ) -> Result<u128, LedgerError> {
        self.access.check_mint_and_burn(caller)?;

        let Some(acct) = self.accounts.get_mut(address) else {
            if amount == AMOUNT_MAX {
                // Draining an account that was never credited is a no-op.
                return Ok(0);
            }
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available: 0,
            });
        };
        let projected = acct
            .projected_balance_checked(now)
            .ok_or(LedgerError::Overflow)?;
        let resolved = if amount == AMOUNT_MAX { projected } else { amount };
        if resolved > projected {
            return Err(LedgerError::InsufficientBalance {
                needed: resolved,
                available: projected,
            });
        }
        if resolved == 0 {
            if amount == AMOUNT_MAX {
                return Ok(0);
            }
            return Err(LedgerError::ZeroAmount);
        }
        let interest = projected - acct.principal;
        let new_supply = self
            .total_supply
            .checked_add(interest)
            .ok_or(LedgerError::Overflow)?
            - resolved;

        // Cannot fail: the same projection was validated above.
        acct.materialize(now).ok_or(LedgerError::Overflow)?;
        acct.principal -= resolved;
        self.total_supply = new_supply;

        self.record_interest(address, interest);
        self.events.push(LedgerEvent::Burned {
            account: address.clone(),
            amount: resolved,
        });
        tracing::info!(account = %address, amount = resolved, "burned");
        Ok(resolved)
    }

    /// Move `amount` units from `from` to `to`, materializing both sides
    /// first. [`AMOUNT_MAX`] resolves to `from`'s full current balance. A
    /// recipient at zero balance inherits the sender's locked rate rather
    /// than the current global rate.
    ///
    /// `caller` must be `from` or an approved delegate. Returns the resolved
    /// amount transferred.
    pub fn transfer(
        &mut self,
        caller: &AccountAddress,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u128,
        now: Timestamp,
    ) -> Result<u128, LedgerError> {
        self.access.check_owner_or_delegate(caller, from)?;

        let Some(from_acct) = self.accounts.get(from) else {
            if amount == AMOUNT_MAX {
                return Ok(0);
            }
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available: 0,
            });
        };
        let from_rate = from_acct.locked_rate;
        let from_projected = from_acct
            .projected_balance_checked(now)
            .ok_or(LedgerError::Overflow)?;
        let resolved = if amount == AMOUNT_MAX {
            from_projected
        } else {
            amount
        };
        if resolved > from_projected {
            return Err(LedgerError::InsufficientBalance {
                needed: resolved,
                available: from_projected,
            });
        }
        if resolved == 0 {
            if amount == AMOUNT_MAX {
                return Ok(0);
            }
            return Err(LedgerError::ZeroAmount);
        }
        let from_interest = from_projected - from_acct.principal;

        if from == to {
            // Self-transfer is a materialize-only no-op on balances.
            let new_supply = self
                .total_supply
                .checked_add(from_interest)
                .ok_or(LedgerError::Overflow)?;
            let acct = self
                .accounts
                .get_mut(from)
                .ok_or_else(|| LedgerError::AccountNotFound(from.to_string()))?;
            acct.materialize(now).ok_or(LedgerError::Overflow)?;
            self.total_supply = new_supply;
            self.record_interest(from, from_interest);
            self.events.push(LedgerEvent::TransferCompleted {
                from: from.clone(),
                to: to.clone(),
                amount: resolved,
            });
            return Ok(resolved);
        }

        let (to_principal, to_projected) = match self.accounts.get(to) {
            Some(acct) => (
                acct.principal,
                acct.projected_balance_checked(now)
                    .ok_or(LedgerError::Overflow)?,
            ),
            None => (0, 0),
        };
        let to_interest = to_projected - to_principal;
        to_projected
            .checked_add(resolved)
            .ok_or(LedgerError::Overflow)?;
        let new_supply = self
            .total_supply
            .checked_add(from_interest)
            .and_then(|s| s.checked_add(to_interest))
            .ok_or(LedgerError::Overflow)?;

        // Commit. Both projections were validated above.
        let from_acct = self
            .accounts
            .get_mut(from)
            .ok_or_else(|| LedgerError::AccountNotFound(from.to_string()))?;
        from_acct.materialize(now).ok_or(LedgerError::Overflow)?;
        from_acct.principal -= resolved;

        let to_acct = self
            .accounts
            .entry(to.clone())
            .or_insert_with(|| Account::new(from_rate, now));
        to_acct.materialize(now).ok_or(LedgerError::Overflow)?;
        if to_projected == 0 {
            to_acct.locked_rate = from_rate;
        }
        to_acct.principal += resolved;
        self.total_supply = new_supply;

        self.record_interest(from, from_interest);
        self.record_interest(to, to_interest);
        self.events.push(LedgerEvent::TransferCompleted {
            from: from.clone(),
            to: to.clone(),
            amount: resolved,
        });
        tracing::info!(%from, %to, amount = resolved, "transfer completed");
        Ok(resolved)
    }

    /// Redeem: burn ledger units, then have custody release the underlying
    /// asset. The burn commits strictly before the external call; a failed
    /// release rolls the burn back, so no partial redeem is ever observable.
    pub fn redeem(
        &mut self,
        caller: &AccountAddress,
        address: &AccountAddress,
        amount: u128,
        custody: &mut dyn AssetCustody,
        now: Timestamp,
    ) -> Result<u128, LedgerError> {
        let snapshot = self.accounts.get(address).cloned();
        let supply_before = self.total_supply;
        let events_before = self.events.len();

        let burned = self.burn(caller, address, amount, now)?;
        match custody.release(address, burned) {
            Ok(()) => {
                tracing::info!(account = %address, amount = burned, "redeemed");
                Ok(burned)
            }
            Err(e) => {
                // One transaction boundary: undo the burn and its events.
                match snapshot {
                    Some(prev) => {
                        self.accounts.insert(address.clone(), prev);
                    }
                    None => {
                        self.accounts.remove(address);
                    }
                }
                self.total_supply = supply_before;
                self.events.truncate(events_before);
                Err(LedgerError::AssetReleaseFailed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Drain audit events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Record an audit event from a surrounding component (e.g. the
    /// transfer gateway) into this ledger's log.
    pub fn record_event(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }

    fn record_interest(&mut self, address: &AccountAddress, interest: u128) {
        if interest > 0 {
            self.events.push(LedgerEvent::InterestMaterialized {
                account: address.clone(),
                amount: interest,
            });
            tracing::debug!(account = %address, amount = interest, "interest materialized");
        }
    }
}

impl AccrualLedger {
    /// Persist all ledger state to a store.
    pub fn save_to_store(
        &self,
        accounts: &dyn AccountStore,
        meta: &dyn MetaStore,
    ) -> Result<(), LedgerError> {
        meta.put_meta(META_TOTAL_SUPPLY, &self.total_supply.to_be_bytes())?;
        let caps = bincode::serialize(&self.access)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        meta.put_meta(META_CAPABILITIES, &caps)?;
        for (addr, acct) in &self.accounts {
            let bytes = bincode::serialize(acct)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            accounts.put_account(addr, &bytes)?;
        }
        Ok(())
    }

    /// Restore ledger state from a store. `admin` is used only when no
    /// capability registry was persisted (a fresh store).
    pub fn load_from_store(
        accounts: &dyn AccountStore,
        meta: &dyn MetaStore,
        admin: AccountAddress,
    ) -> Result<Self, LedgerError> {
        let total_supply = match meta.get_meta(META_TOTAL_SUPPLY)? {
            Some(bytes) if bytes.len() == 16 => {
                let mut raw = [0u8; 16];
                raw.copy_from_slice(&bytes);
                u128::from_be_bytes(raw)
            }
            _ => 0,
        };
        let access = match meta.get_meta(META_CAPABILITIES)? {
            Some(bytes) => bincode::deserialize(&bytes)
                .map_err(|e| StoreError::Serialization(e.to_string()))?,
            None => CapabilityRegistry::new(admin),
        };
        let mut map = HashMap::new();
        for (addr, bytes) in accounts.iter_accounts()? {
            let acct: Account = bincode::deserialize(&bytes)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            map.insert(addr, acct);
        }
        Ok(Self {
            accounts: map,
            access,
            total_supply,
            events: Vec::new(),
        })
    }
}
