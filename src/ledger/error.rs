//! Typed transition failures.
//!
//! Every failure is a precondition violation: it is reported before any state
//! is touched and will recur until the caller changes the request.

use super::identity::Identity;
use thiserror::Error;

/// Ledger transition errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("identity {0} is already registered")]
    AlreadyRegistered(Identity),

    #[error("reputation {reputation} is below the minimum of {minimum}")]
    ReputationTooLow { reputation: u64, minimum: u64 },

    #[error("identity {0} is not registered")]
    NotRegistered(Identity),

    #[error("proposal {0} does not exist")]
    InvalidProposal(u64),

    #[error("voting on proposal {proposal_id} closed at {deadline}")]
    VotingClosed { proposal_id: u64, deadline: u64 },

    #[error("proposal {0} has already been executed")]
    AlreadyExecuted(u64),

    #[error("identity {voter} already voted on proposal {proposal_id}")]
    DuplicateVote { proposal_id: u64, voter: Identity },

    #[error("proposal description must not be empty")]
    EmptyDescription,

    #[error("reputation {requested} exceeds the cap of {cap}")]
    ReputationCapExceeded { requested: u64, cap: u64 },

    #[error("identity {0} is not the ledger admin")]
    Unauthorized(Identity),
}

impl LedgerError {
    /// Stable tag naming the failure kind (without payload).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::AlreadyRegistered(_) => "AlreadyRegistered",
            Self::ReputationTooLow { .. } => "ReputationTooLow",
            Self::NotRegistered(_) => "NotRegistered",
            Self::InvalidProposal(_) => "InvalidProposal",
            Self::VotingClosed { .. } => "VotingClosed",
            Self::AlreadyExecuted(_) => "AlreadyExecuted",
            Self::DuplicateVote { .. } => "DuplicateVote",
            Self::EmptyDescription => "EmptyDescription",
            Self::ReputationCapExceeded { .. } => "ReputationCapExceeded",
            Self::Unauthorized(_) => "Unauthorized",
        }
    }
}

/// Ledger result type.
pub type LedgerResult<T> = Result<T, LedgerError>;
