//! Read-only projections over ledger state.

use super::error::{LedgerError, LedgerResult};
use super::identity::Identity;
use super::state::{Account, LedgerState, Proposal, VoteRecord};
use super::weight::voting_weight;
use serde::{Deserialize, Serialize};

/// Public view of a proposal's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalResults {
    pub description: String,
    pub for_votes: u64,
    pub against_votes: u64,
    pub deadline: u64,
    pub executed: bool,
    pub proposer: Identity,
}

impl From<&Proposal> for ProposalResults {
    fn from(proposal: &Proposal) -> Self {
        Self {
            description: proposal.description.clone(),
            for_votes: proposal.for_votes,
            against_votes: proposal.against_votes,
            deadline: proposal.deadline,
            executed: proposal.executed,
            proposer: proposal.proposer,
        }
    }
}

/// Voting status of a proposal at a given logical time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    Open,
    Closed,
    Executed,
}

impl LedgerState {
    fn proposal(&self, proposal_id: u64) -> LedgerResult<&Proposal> {
        usize::try_from(proposal_id)
            .ok()
            .and_then(|index| self.proposals.get(index))
            .ok_or(LedgerError::InvalidProposal(proposal_id))
    }

    /// Number of proposals ever created.
    pub fn proposal_count(&self) -> u64 {
        self.proposals.len() as u64
    }

    /// Tallies and metadata of a proposal.
    pub fn get_results(&self, proposal_id: u64) -> LedgerResult<ProposalResults> {
        self.proposal(proposal_id).map(ProposalResults::from)
    }

    pub fn has_voted(&self, proposal_id: u64, identity: &Identity) -> LedgerResult<bool> {
        Ok(self.proposal(proposal_id)?.has_voted(identity))
    }

    /// The vote `identity` cast on a proposal, if any.
    pub fn vote_of(
        &self,
        proposal_id: u64,
        identity: &Identity,
    ) -> LedgerResult<Option<VoteRecord>> {
        Ok(self.proposal(proposal_id)?.voters.get(identity).copied())
    }

    pub fn proposal_status(&self, proposal_id: u64, now: u64) -> LedgerResult<ProposalStatus> {
        let proposal = self.proposal(proposal_id)?;
        Ok(if proposal.executed {
            ProposalStatus::Executed
        } else if now > proposal.deadline {
            ProposalStatus::Closed
        } else {
            ProposalStatus::Open
        })
    }

    /// All proposals in id order.
    pub fn proposals(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.iter()
    }

    pub fn account(&self, identity: &Identity) -> Option<&Account> {
        self.accounts.get(identity)
    }

    /// All accounts, sorted by identity.
    pub fn accounts(&self) -> impl Iterator<Item = (&Identity, &Account)> {
        self.accounts.iter()
    }

    pub fn reputation_of(&self, identity: &Identity) -> Option<u64> {
        self.accounts.get(identity).map(|account| account.reputation)
    }

    /// Weight `identity` would vote with right now (0 if unregistered).
    pub fn voting_weight_of(&self, identity: &Identity) -> u64 {
        self.reputation_of(identity).map(voting_weight).unwrap_or(0)
    }
}
