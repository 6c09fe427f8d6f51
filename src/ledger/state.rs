//! Ledger state: the single owned store of accounts and proposals.

use super::constants::ADMIN_INITIAL_REPUTATION;
use super::identity::Identity;
use crate::serialization::{sha256_of_cbor, SerializationError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Per-identity reputation and participation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Never above `REPUTATION_CAP`.
    pub reputation: u64,
    /// Proposals created plus votes cast.
    pub participation_count: u64,
    pub registered: bool,
}

impl Account {
    pub(crate) fn new(reputation: u64) -> Self {
        Self {
            reputation,
            participation_count: 0,
            registered: true,
        }
    }

    pub(crate) fn record_participation(&mut self) {
        self.participation_count = self.participation_count.saturating_add(1);
    }
}

/// A single voter's record on a proposal. Written once, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteRecord {
    pub has_voted: bool,
    pub weight: u64,
    pub support: bool,
}

/// A governance proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Proposal {
    pub id: u64,
    pub description: String,
    pub for_votes: u64,
    pub against_votes: u64,
    /// Last logical time at which votes are accepted (inclusive).
    pub deadline: u64,
    /// Reserved; nothing in the ledger sets it.
    pub executed: bool,
    pub proposer: Identity,
    pub voters: BTreeMap<Identity, VoteRecord>,
}

impl Proposal {
    pub(crate) fn new(id: u64, description: String, proposer: Identity, deadline: u64) -> Self {
        Self {
            id,
            description,
            for_votes: 0,
            against_votes: 0,
            deadline,
            executed: false,
            proposer,
            voters: BTreeMap::new(),
        }
    }

    pub fn has_voted(&self, identity: &Identity) -> bool {
        self.voters
            .get(identity)
            .map(|record| record.has_voted)
            .unwrap_or(false)
    }
}

/// Whole ledger state.
///
/// Accounts use a sorted map so the canonical encoding (and therefore
/// [`LedgerState::state_digest`]) depends only on content.
///
/// State is encode-only: the only way to obtain one is [`LedgerState::new`]
/// followed by validated transitions.
///
/// ```compile_fail
/// let state: repute::ledger::LedgerState = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerState {
    pub(crate) admin: Identity,
    pub(crate) accounts: BTreeMap<Identity, Account>,
    pub(crate) proposals: Vec<Proposal>,
}

impl LedgerState {
    /// Genesis state with `admin` pre-registered.
    pub fn new(admin: Identity) -> Self {
        let mut accounts = BTreeMap::new();
        accounts.insert(admin, Account::new(ADMIN_INITIAL_REPUTATION));

        Self {
            admin,
            accounts,
            proposals: Vec::new(),
        }
    }

    pub fn admin(&self) -> &Identity {
        &self.admin
    }

    pub(crate) fn is_registered(&self, identity: &Identity) -> bool {
        self.accounts
            .get(identity)
            .map(|account| account.registered)
            .unwrap_or(false)
    }

    /// SHA-256 over the canonical CBOR encoding of the state.
    pub fn state_digest(&self) -> Result<StateDigest, SerializationError> {
        sha256_of_cbor(self).map(StateDigest)
    }
}

/// Digest of a ledger state. Serialized as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateDigest(pub [u8; 32]);

impl Serialize for StateDigest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Display for StateDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
