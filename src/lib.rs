//! repute - Deterministic reputation-weighted governance ledger
//!
//! A state-transition engine for a shared, tamper-evident ledger: account
//! registration, proposal lifecycle, weighted vote tallying and a capped
//! reputation policy.
//!
//! Key principles:
//! - Pure transitions: caller identity and logical time come from outside
//! - Deterministic: same calls in the same order, same state digest
//! - Atomic: a rejected call changes nothing
//! - Serialized: one lock orders every write
//!
//! Layers:
//! - [`ledger`]: the state machine itself
//! - [`engine`]: serialized async handle, event journal and subscriptions
//! - [`replay`]: TOML transaction scripts driven through an engine
//! - [`serialization`]: canonical CBOR encoding for state digests

pub mod engine;
pub mod ledger;
pub mod replay;
pub mod serialization;
