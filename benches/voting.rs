//! Benchmarks for vote admission and tallying
//!
//! - voting_weight over the full reputation range
//! - cast_vote against proposals with growing voter maps
//! - state digest over a populated ledger

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use repute::ledger::{voting_weight, Identity, LedgerState, REPUTATION_CAP};

fn voter(index: usize) -> Identity {
    Identity::from_label(&format!("voter-{}", index))
}

/// Ledger with `voters` registered accounts and one open proposal.
fn create_ledger(voters: usize) -> LedgerState {
    let admin = Identity::from_label("admin");
    let mut state = LedgerState::new(admin);
    for i in 0..voters {
        state.register(voter(i), 10 + (i as u64 % 990)).unwrap();
    }
    state.create_proposal(admin, "bench".to_string(), 0).unwrap();
    state
}

fn benchmark_voting_weight(c: &mut Criterion) {
    c.bench_function("voting_weight_full_range", |b| {
        b.iter(|| {
            (0..=REPUTATION_CAP)
                .map(|r| voting_weight(black_box(r)))
                .sum::<u64>()
        });
    });
}

fn benchmark_cast_vote_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("cast_vote_scaling");

    for size in [10, 100, 1000].iter() {
        let state = create_ledger(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut state = state.clone();
                for i in 0..size {
                    state.cast_vote(voter(i), 0, i % 2 == 0, 1).unwrap();
                }
                black_box(state.proposal_count())
            });
        });
    }

    group.finish();
}

fn benchmark_state_digest(c: &mut Criterion) {
    let mut state = create_ledger(500);
    for i in 0..500 {
        state.cast_vote(voter(i), 0, true, 1).unwrap();
    }

    c.bench_function("state_digest_500_accounts", |b| {
        b.iter(|| black_box(&state).state_digest().unwrap());
    });
}

criterion_group!(
    benches,
    benchmark_voting_weight,
    benchmark_cast_vote_scaling,
    benchmark_state_digest
);
criterion_main!(benches);
