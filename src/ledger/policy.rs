//! Reputation policy: additive bonuses saturating at the cap.

use super::constants::REPUTATION_CAP;
use super::events::LedgerEvent;
use super::identity::Identity;
use super::state::Account;

/// `min(current + bonus, REPUTATION_CAP)`.
pub fn capped_reputation(current: u64, bonus: u64) -> u64 {
    current.saturating_add(bonus).min(REPUTATION_CAP)
}

impl Account {
    /// Apply a bonus to this account and record the update event.
    ///
    /// Returns the new reputation.
    pub(crate) fn apply_bonus(
        &mut self,
        identity: Identity,
        bonus: u64,
        events: &mut Vec<LedgerEvent>,
    ) -> u64 {
        self.reputation = capped_reputation(self.reputation, bonus);
        events.push(LedgerEvent::ReputationUpdated {
            identity,
            new_reputation: self.reputation,
        });
        self.reputation
    }
}
