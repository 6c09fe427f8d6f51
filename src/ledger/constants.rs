//! Ledger policy constants.
//!
//! Logical time is measured in seconds; every `now` passed to the ledger uses
//! the same unit.

/// Minimum reputation required to register, propose and vote.
pub const MIN_REPUTATION: u64 = 10;

/// Hard upper bound on any account's reputation.
pub const REPUTATION_CAP: u64 = 1000;

/// Voting window: 7 days in seconds.
pub const VOTING_DURATION: u64 = 7 * 24 * 60 * 60;

/// Reputation bonus for creating a proposal.
pub const PROPOSAL_BONUS: u64 = 5;

/// Reputation bonus for casting a vote.
pub const VOTE_BONUS: u64 = 2;

/// Reputation of the admin account at genesis.
pub const ADMIN_INITIAL_REPUTATION: u64 = 100;
