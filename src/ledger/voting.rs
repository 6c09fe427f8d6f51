//! Voting engine: admission, weighting and tallying of votes.

use super::constants::{MIN_REPUTATION, VOTE_BONUS};
use super::error::{LedgerError, LedgerResult};
use super::events::{LedgerEvent, Receipt};
use super::identity::Identity;
use super::state::{LedgerState, VoteRecord};
use super::weight::voting_weight;

impl LedgerState {
    /// Cast `caller`'s weighted vote on a proposal.
    ///
    /// Checks run in a fixed order and the first failure is returned; no
    /// state changes unless every check passes. Returns the vote weight.
    pub fn cast_vote(
        &mut self,
        caller: Identity,
        proposal_id: u64,
        support: bool,
        now: u64,
    ) -> LedgerResult<Receipt<u64>> {
        let proposal = usize::try_from(proposal_id)
            .ok()
            .and_then(|index| self.proposals.get_mut(index))
            .ok_or(LedgerError::InvalidProposal(proposal_id))?;

        if now > proposal.deadline {
            return Err(LedgerError::VotingClosed {
                proposal_id,
                deadline: proposal.deadline,
            });
        }
        if proposal.executed {
            return Err(LedgerError::AlreadyExecuted(proposal_id));
        }
        let account = match self.accounts.get_mut(&caller) {
            Some(account) if account.registered => account,
            _ => return Err(LedgerError::NotRegistered(caller)),
        };
        if proposal.has_voted(&caller) {
            return Err(LedgerError::DuplicateVote {
                proposal_id,
                voter: caller,
            });
        }
        if account.reputation < MIN_REPUTATION {
            return Err(LedgerError::ReputationTooLow {
                reputation: account.reputation,
                minimum: MIN_REPUTATION,
            });
        }

        let weight = voting_weight(account.reputation);
        proposal.voters.insert(
            caller,
            VoteRecord {
                has_voted: true,
                weight,
                support,
            },
        );
        if support {
            proposal.for_votes = proposal.for_votes.saturating_add(weight);
        } else {
            proposal.against_votes = proposal.against_votes.saturating_add(weight);
        }

        let mut events = Vec::with_capacity(2);
        account.record_participation();
        account.apply_bonus(caller, VOTE_BONUS, &mut events);
        events.push(LedgerEvent::VoteCasted {
            proposal_id,
            voter: caller,
            support,
            weight,
        });

        Ok(Receipt::new(weight, events))
    }
}
