//! Proposal store: creation of new proposals.

use super::constants::{MIN_REPUTATION, PROPOSAL_BONUS, VOTING_DURATION};
use super::error::{LedgerError, LedgerResult};
use super::events::{LedgerEvent, Receipt};
use super::identity::Identity;
use super::state::{LedgerState, Proposal};

impl LedgerState {
    /// Open a proposal for voting until `now + VOTING_DURATION`.
    ///
    /// Returns the new proposal id. The proposer's participation count goes
    /// up by one and they receive [`PROPOSAL_BONUS`].
    pub fn create_proposal(
        &mut self,
        caller: Identity,
        description: String,
        now: u64,
    ) -> LedgerResult<Receipt<u64>> {
        let account = match self.accounts.get_mut(&caller) {
            Some(account) if account.registered => account,
            _ => return Err(LedgerError::NotRegistered(caller)),
        };
        if account.reputation < MIN_REPUTATION {
            return Err(LedgerError::ReputationTooLow {
                reputation: account.reputation,
                minimum: MIN_REPUTATION,
            });
        }
        if description.is_empty() {
            return Err(LedgerError::EmptyDescription);
        }

        let proposal_id = self.proposals.len() as u64;
        let deadline = now.saturating_add(VOTING_DURATION);
        self.proposals.push(Proposal::new(
            proposal_id,
            description.clone(),
            caller,
            deadline,
        ));

        let mut events = Vec::with_capacity(2);
        account.record_participation();
        account.apply_bonus(caller, PROPOSAL_BONUS, &mut events);
        events.push(LedgerEvent::ProposalCreated {
            proposal_id,
            proposer: caller,
            description,
        });

        Ok(Receipt::new(proposal_id, events))
    }
}
