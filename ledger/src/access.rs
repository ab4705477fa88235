//! Capability registry — who may mint/burn, and who may spend for whom.
//!
//! Privileged operations are gated by an explicit capability set keyed by
//! identity, checked once at the entry of each operation. The registry is
//! policy-free: deployment grants the mint-and-burn capability to exactly
//! the custody component and the transfer gateway.

use crate::error::LedgerError;
use rbx_types::AccountAddress;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapabilityRegistry {
    /// The single administrative identity allowed to grant and revoke.
    admin: AccountAddress,
    /// Identities holding the mint-and-burn capability.
    mint_and_burn: HashSet<AccountAddress>,
    /// Approved spending delegates, keyed by account owner.
    delegates: HashMap<AccountAddress, HashSet<AccountAddress>>,
}

impl CapabilityRegistry {
    pub fn new(admin: AccountAddress) -> Self {
        Self {
            admin,
            mint_and_burn: HashSet::new(),
            delegates: HashMap::new(),
        }
    }

    pub fn admin(&self) -> &AccountAddress {
        &self.admin
    }

    /// Grant the mint-and-burn capability. Admin only.
    pub fn grant_mint_and_burn(
        &mut self,
        caller: &AccountAddress,
        grantee: &AccountAddress,
    ) -> Result<(), LedgerError> {
        self.check_admin(caller, "grant_mint_and_burn")?;
        self.mint_and_burn.insert(grantee.clone());
        Ok(())
    }

    /// Revoke the mint-and-burn capability. Admin only.
    pub fn revoke_mint_and_burn(
        &mut self,
        caller: &AccountAddress,
        grantee: &AccountAddress,
    ) -> Result<(), LedgerError> {
        self.check_admin(caller, "revoke_mint_and_burn")?;
        self.mint_and_burn.remove(grantee);
        Ok(())
    }

    /// Approve `delegate` to spend on behalf of `owner`.
    pub fn approve_delegate(&mut self, owner: &AccountAddress, delegate: &AccountAddress) {
        self.delegates
            .entry(owner.clone())
            .or_default()
            .insert(delegate.clone());
    }

    /// Withdraw a previously approved delegate.
    pub fn revoke_delegate(&mut self, owner: &AccountAddress, delegate: &AccountAddress) {
        if let Some(set) = self.delegates.get_mut(owner) {
            set.remove(delegate);
        }
    }

    pub fn has_mint_and_burn(&self, caller: &AccountAddress) -> bool {
        self.mint_and_burn.contains(caller)
    }

    pub fn is_owner_or_delegate(&self, caller: &AccountAddress, owner: &AccountAddress) -> bool {
        caller == owner
            || self
                .delegates
                .get(owner)
                .map_or(false, |set| set.contains(caller))
    }

    pub fn check_mint_and_burn(&self, caller: &AccountAddress) -> Result<(), LedgerError> {
        if self.has_mint_and_burn(caller) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized {
                caller: caller.to_string(),
                operation: "mint_and_burn",
            })
        }
    }

    pub fn check_owner_or_delegate(
        &self,
        caller: &AccountAddress,
        owner: &AccountAddress,
    ) -> Result<(), LedgerError> {
        if self.is_owner_or_delegate(caller, owner) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized {
                caller: caller.to_string(),
                operation: "transfer",
            })
        }
    }

    fn check_admin(
        &self,
        caller: &AccountAddress,
        operation: &'static str,
    ) -> Result<(), LedgerError> {
        if *caller == self.admin {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized {
                caller: caller.to_string(),
                operation,
            })
        }
    }
}
