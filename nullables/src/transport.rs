//! Nullable transport — a controllable channel between two gateways.
//!
//! Carries opaque encoded payloads so this crate doesn't depend on the
//! gateway's message type. Delivery order is whatever the test asks for:
//! front, back, or duplicated — modelling an at-least-once, possibly
//! reordered channel. Duplicate suppression (the transport's contractual
//! responsibility) is byte-identity based.

use std::collections::{HashSet, VecDeque};

/// An in-memory message channel for testing cross-ledger delivery.
pub struct NullTransport {
    queue: VecDeque<Vec<u8>>,
    delivered: HashSet<Vec<u8>>,
}

impl NullTransport {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            delivered: HashSet::new(),
        }
    }

    /// Accept an encoded message for later delivery.
    pub fn enqueue(&mut self, payload: Vec<u8>) {
        self.queue.push_back(payload);
    }

    /// Re-enqueue the oldest pending message, simulating an at-least-once
    /// transport that retries.
    pub fn duplicate_front(&mut self) {
        if let Some(front) = self.queue.front().cloned() {
            self.queue.push_back(front);
        }
    }

    /// Deliver the oldest pending message, skipping payloads that were
    /// already delivered once.
    pub fn deliver_next(&mut self) -> Option<Vec<u8>> {
        while let Some(payload) = self.queue.pop_front() {
            if self.delivered.insert(payload.clone()) {
                return Some(payload);
            }
        }
        None
    }

    /// Deliver the newest pending message first, simulating reordering.
    pub fn deliver_last(&mut self) -> Option<Vec<u8>> {
        while let Some(payload) = self.queue.pop_back() {
            if self.delivered.insert(payload.clone()) {
                return Some(payload);
            }
        }
        None
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Default for NullTransport {
    fn default() -> Self {
        Self::new()
    }
}
