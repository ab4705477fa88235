//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies (clock, storage, transport) are abstracted behind
//! traits or explicit call sites. This crate provides test-friendly
//! implementations that return deterministic values, can be controlled
//! programmatically, and never touch the filesystem or network.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod store;
pub mod transport;

pub use clock::NullClock;
pub use store::NullStore;
pub use transport::NullTransport;
