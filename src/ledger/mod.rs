//! Reputation ledger state machine.
//!
//! Pure state transitions: every operation takes the caller identity (already
//! authenticated upstream) and, where time matters, the logical `now`. The
//! ledger never reads a clock and never performs I/O, so identical calls in
//! identical order always produce identical state.
//!
//! - Account registry: [`LedgerState::register`], [`LedgerState::adjust_reputation`]
//! - Proposal store: [`LedgerState::create_proposal`]
//! - Voting engine: [`LedgerState::cast_vote`], [`voting_weight`]
//! - Reputation policy: [`capped_reputation`]
//! - Read API: see `query`

pub mod constants;
pub mod error;
pub mod events;
pub mod identity;
pub mod policy;
pub mod proposals;
pub mod query;
pub mod registry;
pub mod state;
pub mod voting;
pub mod weight;

#[cfg(test)]
mod proptests;

pub use constants::*;
pub use error::{LedgerError, LedgerResult};
pub use events::{EventKind, LedgerEvent, Receipt};
pub use identity::Identity;
pub use policy::capped_reputation;
pub use query::{ProposalResults, ProposalStatus};
pub use state::{Account, LedgerState, Proposal, StateDigest, VoteRecord};
pub use weight::voting_weight;
