//! Shared utilities for the RBX protocol.

pub mod logging;

pub use logging::{init_tracing, init_tracing_json};
