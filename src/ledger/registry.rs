//! Account registry: registration and admin reputation overrides.

use super::constants::{MIN_REPUTATION, REPUTATION_CAP};
use super::error::{LedgerError, LedgerResult};
use super::events::{LedgerEvent, Receipt};
use super::identity::Identity;
use super::state::{Account, LedgerState};

impl LedgerState {
    /// Register `caller` with an initial reputation.
    pub fn register(
        &mut self,
        caller: Identity,
        initial_reputation: u64,
    ) -> LedgerResult<Receipt<()>> {
        if self.is_registered(&caller) {
            return Err(LedgerError::AlreadyRegistered(caller));
        }
        if initial_reputation < MIN_REPUTATION {
            return Err(LedgerError::ReputationTooLow {
                reputation: initial_reputation,
                minimum: MIN_REPUTATION,
            });
        }
        if initial_reputation > REPUTATION_CAP {
            return Err(LedgerError::ReputationCapExceeded {
                requested: initial_reputation,
                cap: REPUTATION_CAP,
            });
        }

        self.accounts.insert(caller, Account::new(initial_reputation));

        Ok(Receipt::new(
            (),
            vec![LedgerEvent::UserRegistered { identity: caller }],
        ))
    }

    /// Set `target`'s reputation directly. Admin only; bypasses the bonus path.
    pub fn adjust_reputation(
        &mut self,
        caller: Identity,
        target: Identity,
        new_reputation: u64,
    ) -> LedgerResult<Receipt<()>> {
        if caller != self.admin {
            return Err(LedgerError::Unauthorized(caller));
        }
        let account = match self.accounts.get_mut(&target) {
            Some(account) if account.registered => account,
            _ => return Err(LedgerError::NotRegistered(target)),
        };
        if new_reputation > REPUTATION_CAP {
            return Err(LedgerError::ReputationCapExceeded {
                requested: new_reputation,
                cap: REPUTATION_CAP,
            });
        }
        account.reputation = new_reputation;

        Ok(Receipt::new(
            (),
            vec![LedgerEvent::ReputationUpdated {
                identity: target,
                new_reputation,
            }],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (LedgerState, Identity) {
        let admin = Identity::from_label("admin");
        (LedgerState::new(admin), admin)
    }

    #[test]
    fn test_register_creates_account() {
        let (mut state, _) = setup();
        let alice = Identity::from_label("alice");

        let receipt = state.register(alice, 10).unwrap();

        assert_eq!(
            receipt.events,
            vec![LedgerEvent::UserRegistered { identity: alice }]
        );
        let account = state.accounts.get(&alice).unwrap();
        assert_eq!(account.reputation, 10);
        assert_eq!(account.participation_count, 0);
        assert!(account.registered);
    }

    #[test]
    fn test_register_twice_fails_regardless_of_arguments() {
        let (mut state, admin) = setup();
        let alice = Identity::from_label("alice");
        state.register(alice, 10).unwrap();

        assert_eq!(
            state.register(alice, 500),
            Err(LedgerError::AlreadyRegistered(alice))
        );
        assert_eq!(
            state.register(alice, 1),
            Err(LedgerError::AlreadyRegistered(alice))
        );
        assert_eq!(
            state.register(admin, 50),
            Err(LedgerError::AlreadyRegistered(admin))
        );
        assert_eq!(state.accounts.get(&alice).unwrap().reputation, 10);
    }

    #[test]
    fn test_register_rejects_low_reputation() {
        let (mut state, _) = setup();
        let bob = Identity::from_label("bob");

        assert_eq!(
            state.register(bob, 9),
            Err(LedgerError::ReputationTooLow {
                reputation: 9,
                minimum: 10
            })
        );
        assert!(!state.is_registered(&bob));
    }

    #[test]
    fn test_register_rejects_reputation_above_cap() {
        let (mut state, _) = setup();
        let bob = Identity::from_label("bob");

        assert!(matches!(
            state.register(bob, 1001),
            Err(LedgerError::ReputationCapExceeded { requested: 1001, .. })
        ));
        assert!(state.register(bob, 1000).is_ok());
    }

    #[test]
    fn test_adjust_requires_admin() {
        let (mut state, _) = setup();
        let alice = Identity::from_label("alice");
        state.register(alice, 10).unwrap();

        assert_eq!(
            state.adjust_reputation(alice, alice, 500),
            Err(LedgerError::Unauthorized(alice))
        );
        assert_eq!(state.accounts.get(&alice).unwrap().reputation, 10);
    }

    #[test]
    fn test_adjust_rejects_above_cap() {
        let (mut state, admin) = setup();
        let alice = Identity::from_label("alice");
        state.register(alice, 10).unwrap();

        assert_eq!(
            state.adjust_reputation(admin, alice, 1500),
            Err(LedgerError::ReputationCapExceeded {
                requested: 1500,
                cap: 1000
            })
        );
    }

    #[test]
    fn test_adjust_unregistered_target_fails_before_cap_check() {
        let (mut state, admin) = setup();
        let ghost = Identity::from_label("ghost");

        assert_eq!(
            state.adjust_reputation(admin, ghost, 1500),
            Err(LedgerError::NotRegistered(ghost))
        );
        assert_eq!(
            state.adjust_reputation(admin, ghost, 50),
            Err(LedgerError::NotRegistered(ghost))
        );
    }

    #[test]
    fn test_adjust_sets_value_directly() {
        let (mut state, admin) = setup();
        let alice = Identity::from_label("alice");
        state.register(alice, 10).unwrap();

        let receipt = state.adjust_reputation(admin, alice, 3).unwrap();

        assert_eq!(state.accounts.get(&alice).unwrap().reputation, 3);
        assert_eq!(
            receipt.events,
            vec![LedgerEvent::ReputationUpdated {
                identity: alice,
                new_reputation: 3
            }]
        );
    }
}
