//! Property-based tests for the ledger state machine
//!
//! Tests for:
//! - Weight curve: monotonicity, zero below the minimum
//! - Reputation: cap holds after any operation sequence
//! - Tallies: voter records and tallies stay consistent
//! - Atomicity: rejected operations leave state untouched
//! - Determinism: same call sequence, same digest

use super::*;
use proptest::prelude::*;

const LABELS: [&str; 5] = ["admin", "alice", "bob", "carol", "dave"];

#[derive(Debug, Clone)]
enum Op {
    Register { who: usize, reputation: u64 },
    Propose { who: usize, empty: bool },
    Vote { who: usize, proposal_id: u64, support: bool },
    Adjust { caller: usize, target: usize, reputation: u64 },
    Advance { seconds: u64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..LABELS.len(), 0u64..1200)
            .prop_map(|(who, reputation)| Op::Register { who, reputation }),
        (0..LABELS.len(), any::<bool>()).prop_map(|(who, empty)| Op::Propose { who, empty }),
        (0..LABELS.len(), 0u64..4, any::<bool>()).prop_map(|(who, proposal_id, support)| {
            Op::Vote {
                who,
                proposal_id,
                support,
            }
        }),
        (0..LABELS.len(), 0..LABELS.len(), 0u64..1600).prop_map(|(caller, target, reputation)| {
            Op::Adjust {
                caller,
                target,
                reputation,
            }
        }),
        (0u64..VOTING_DURATION / 2).prop_map(|seconds| Op::Advance { seconds }),
    ]
}

fn identity(index: usize) -> Identity {
    Identity::from_label(LABELS[index])
}

/// Apply one op; returns whether it was accepted.
fn apply(state: &mut LedgerState, now: &mut u64, op: &Op) -> bool {
    match op {
        Op::Register { who, reputation } => state.register(identity(*who), *reputation).is_ok(),
        Op::Propose { who, empty } => {
            let description = if *empty { String::new() } else { "p".to_string() };
            state
                .create_proposal(identity(*who), description, *now)
                .is_ok()
        }
        Op::Vote {
            who,
            proposal_id,
            support,
        } => state
            .cast_vote(identity(*who), *proposal_id, *support, *now)
            .is_ok(),
        Op::Adjust {
            caller,
            target,
            reputation,
        } => state
            .adjust_reputation(identity(*caller), identity(*target), *reputation)
            .is_ok(),
        Op::Advance { seconds } => {
            *now += seconds;
            true
        }
    }
}

fn run(ops: &[Op]) -> LedgerState {
    let mut state = LedgerState::new(identity(0));
    let mut now = 0;
    for op in ops {
        apply(&mut state, &mut now, op);
    }
    state
}

proptest! {
    /// Property: weight never decreases as reputation grows
    #[test]
    fn weight_is_monotonic(a in 0u64..100_000, b in 0u64..100_000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(voting_weight(low) <= voting_weight(high));
    }

    /// Property: weight is zero exactly below the minimum
    #[test]
    fn weight_zero_only_below_minimum(reputation in 0u64..=REPUTATION_CAP) {
        prop_assert_eq!(voting_weight(reputation) == 0, reputation < MIN_REPUTATION);
    }

    /// Property: no account ever exceeds the cap
    #[test]
    fn reputation_never_exceeds_cap(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut state = LedgerState::new(identity(0));
        let mut now = 0;
        for op in &ops {
            apply(&mut state, &mut now, op);
            for (_, account) in state.accounts() {
                prop_assert!(account.reputation <= REPUTATION_CAP);
            }
        }
    }

    /// Property: tallies equal the summed weights of recorded voters
    #[test]
    fn tallies_match_voter_records(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let state = run(&ops);
        for proposal in state.proposals() {
            let mut for_votes = 0;
            let mut against_votes = 0;
            for record in proposal.voters.values() {
                prop_assert!(record.has_voted);
                if record.support {
                    for_votes += record.weight;
                } else {
                    against_votes += record.weight;
                }
            }
            prop_assert_eq!(proposal.for_votes, for_votes);
            prop_assert_eq!(proposal.against_votes, against_votes);
        }
    }

    /// Property: a rejected operation leaves the state byte-for-byte unchanged
    #[test]
    fn rejected_operations_are_atomic(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut state = LedgerState::new(identity(0));
        let mut now = 0;
        for op in &ops {
            let before = state.clone();
            if !apply(&mut state, &mut now, op) {
                prop_assert_eq!(&state, &before);
            }
        }
    }

    /// Property: identical call sequences produce identical digests
    #[test]
    fn replay_is_deterministic(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let a = run(&ops);
        let b = run(&ops);
        prop_assert_eq!(a.state_digest().unwrap(), b.state_digest().unwrap());
    }

    /// Property: participation never decreases
    #[test]
    fn participation_is_monotonic(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut state = LedgerState::new(identity(0));
        let mut now = 0;
        for op in &ops {
            let before: Vec<(Identity, u64)> = state
                .accounts()
                .map(|(id, account)| (*id, account.participation_count))
                .collect();
            apply(&mut state, &mut now, op);
            for (id, count) in before {
                let after = state.account(&id).map(|a| a.participation_count).unwrap_or(0);
                prop_assert!(after >= count);
            }
        }
    }
}
