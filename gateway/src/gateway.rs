//! The per-ledger transfer gateway state machine.

use crate::error::GatewayError;
use crate::message::{CrossLedgerMessage, WIRE_VERSION};
use rbx_ledger::{AccrualLedger, LedgerError};
use rbx_types::{AccountAddress, ChainId, LedgerEvent, Timestamp};

/// One side of a cross-ledger pairing.
///
/// The gateway's `identity` must hold the mint-and-burn capability on its
/// local ledger. It shares no memory with its counterpart: everything it
/// knows about the other side arrives inside a [`CrossLedgerMessage`].
pub struct TransferGateway {
    chain: ChainId,
    identity: AccountAddress,
    remote: Option<ChainId>,
    next_nonce: u64,
    events: Vec<LedgerEvent>,
}

impl TransferGateway {
    pub fn new(chain: ChainId, identity: AccountAddress) -> Self {
        Self {
            chain,
            identity,
            remote: None,
            next_nonce: 0,
            events: Vec::new(),
        }
    }

    pub fn chain(&self) -> ChainId {
        self.chain
    }

    pub fn identity(&self) -> &AccountAddress {
        &self.identity
    }

    /// Pair this gateway with exactly one counterpart ledger. Inbound
    /// messages from any other origin are invalid.
    pub fn register_remote(&mut self, chain: ChainId) -> Result<(), GatewayError> {
        if self.remote.is_some() {
            return Err(GatewayError::RemoteAlreadyRegistered);
        }
        self.remote = Some(chain);
        Ok(())
    }

    /// Outbound lock-or-burn: burn `amount` from `sender` on the local
    /// ledger, then produce the message for the paired ledger.
    ///
    /// The sender's locked rate is read before any mutation, and the burn
    /// commits strictly before the message exists — value leaves this ledger
    /// before a corresponding claim exists anywhere.
    /// [`rbx_ledger::AMOUNT_MAX`] bridges the sender's full balance.
    pub fn send_outbound(
        &mut self,
        ledger: &mut AccrualLedger,
        caller: &AccountAddress,
        sender: &AccountAddress,
        amount: u128,
        destination_account: AccountAddress,
        now: Timestamp,
    ) -> Result<CrossLedgerMessage, GatewayError> {
        let destination_chain = self.remote.ok_or(GatewayError::RemoteNotRegistered)?;
        ledger.authorize_spend(caller, sender)?;
        let origin_rate = ledger
            .rate_of(sender)
            .ok_or_else(|| LedgerError::AccountNotFound(sender.to_string()))?;

        let burned = ledger.burn(&self.identity, sender, amount, now)?;
        if burned == 0 {
            // Only the sentinel on an empty account resolves to zero, and
            // that burn mutated nothing.
            return Err(GatewayError::Ledger(LedgerError::ZeroAmount));
        }

        let nonce = self.next_nonce;
        self.next_nonce += 1;
        let message = CrossLedgerMessage {
            version: WIRE_VERSION,
            origin_chain: self.chain,
            destination_chain,
            nonce,
            amount: burned,
            origin_rate,
            destination_account,
        };
        self.events.push(LedgerEvent::CrossLedgerSent {
            account: sender.clone(),
            amount: burned,
            rate: origin_rate,
            destination_chain,
            nonce,
        });
        tracing::info!(
            account = %sender,
            amount = burned,
            rate = %origin_rate,
            %destination_chain,
            nonce,
            "cross-ledger send"
        );
        Ok(message)
    }

    /// Inbound release-or-mint: validate the delivered message and mint to
    /// its destination account.
    ///
    /// The origin rate applies only if the destination is at zero balance;
    /// a non-zero destination keeps its own locked rate (the inbound mint
    /// behaves exactly like `mint`, not like an override).
    pub fn receive_inbound(
        &mut self,
        ledger: &mut AccrualLedger,
        message: &CrossLedgerMessage,
        now: Timestamp,
    ) -> Result<(), GatewayError> {
        let remote = self.remote.ok_or(GatewayError::RemoteNotRegistered)?;
        if message.version != WIRE_VERSION {
            return Err(GatewayError::InvalidMessage(format!(
                "unsupported wire version {}",
                message.version
            )));
        }
        if message.destination_chain != self.chain {
            return Err(GatewayError::InvalidMessage(format!(
                "message addressed to {}, this is {}",
                message.destination_chain, self.chain
            )));
        }
        if message.origin_chain != remote {
            return Err(GatewayError::InvalidMessage(format!(
                "origin {} is not the registered remote {}",
                message.origin_chain, remote
            )));
        }
        if message.amount == 0 {
            return Err(GatewayError::InvalidMessage("zero amount".into()));
        }
        if !message.destination_account.is_valid() {
            return Err(GatewayError::InvalidMessage(
                "malformed destination account".into(),
            ));
        }

        ledger.mint(
            &self.identity,
            &message.destination_account,
            message.amount,
            message.origin_rate,
            now,
        )?;
        self.events.push(LedgerEvent::CrossLedgerReceived {
            account: message.destination_account.clone(),
            amount: message.amount,
            rate: message.origin_rate,
            origin_chain: message.origin_chain,
            nonce: message.nonce,
        });
        tracing::info!(
            account = %message.destination_account,
            amount = message.amount,
            rate = %message.origin_rate,
            origin_chain = %message.origin_chain,
            nonce = message.nonce,
            "cross-ledger receive"
        );
        Ok(())
    }

    /// Drain audit events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}
