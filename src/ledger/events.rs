//! Events emitted by successful transitions.
//!
//! Events are a side channel: each operation returns the events it produced
//! in its [`Receipt`], and the engine journals and broadcasts them. Payload
//! field order is fixed.

use super::identity::Identity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A ledger event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    UserRegistered {
        identity: Identity,
    },
    ProposalCreated {
        proposal_id: u64,
        proposer: Identity,
        description: String,
    },
    VoteCasted {
        proposal_id: u64,
        voter: Identity,
        support: bool,
        weight: u64,
    },
    ReputationUpdated {
        identity: Identity,
        new_reputation: u64,
    },
}

/// Event discriminant, for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    UserRegistered,
    ProposalCreated,
    VoteCasted,
    ReputationUpdated,
}

impl LedgerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::UserRegistered { .. } => EventKind::UserRegistered,
            Self::ProposalCreated { .. } => EventKind::ProposalCreated,
            Self::VoteCasted { .. } => EventKind::VoteCasted,
            Self::ReputationUpdated { .. } => EventKind::ReputationUpdated,
        }
    }

    /// Whether the event names `identity` in any role.
    pub fn involves(&self, identity: &Identity) -> bool {
        match self {
            Self::UserRegistered { identity: id } => id == identity,
            Self::ProposalCreated { proposer, .. } => proposer == identity,
            Self::VoteCasted { voter, .. } => voter == identity,
            Self::ReputationUpdated { identity: id, .. } => id == identity,
        }
    }

    /// Proposal the event refers to, if any.
    pub fn proposal_id(&self) -> Option<u64> {
        match self {
            Self::ProposalCreated { proposal_id, .. } | Self::VoteCasted { proposal_id, .. } => {
                Some(*proposal_id)
            }
            _ => None,
        }
    }
}

impl fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserRegistered { identity } => {
                write!(f, "UserRegistered({})", identity.short())
            }
            Self::ProposalCreated {
                proposal_id,
                proposer,
                description,
            } => write!(
                f,
                "ProposalCreated({}, {}, {:?})",
                proposal_id,
                proposer.short(),
                description
            ),
            Self::VoteCasted {
                proposal_id,
                voter,
                support,
                weight,
            } => write!(
                f,
                "VoteCasted({}, {}, {}, {})",
                proposal_id,
                voter.short(),
                support,
                weight
            ),
            Self::ReputationUpdated {
                identity,
                new_reputation,
            } => write!(
                f,
                "ReputationUpdated({}, {})",
                identity.short(),
                new_reputation
            ),
        }
    }
}

/// Outcome of a successful transition: its return value plus emitted events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt<T> {
    pub value: T,
    pub events: Vec<LedgerEvent>,
}

impl<T> Receipt<T> {
    pub fn new(value: T, events: Vec<LedgerEvent>) -> Self {
        Self { value, events }
    }
}
