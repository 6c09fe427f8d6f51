//! Serialized ledger engine.
//!
//! Wraps [`LedgerState`] behind a single `RwLock`:
//! - Writes (register, propose, vote, adjust) hold the write lock for the
//!   whole validate-mutate-journal-broadcast sequence, so they are totally
//!   ordered and never observed half-applied
//! - Reads share the lock and always see a committed state
//! - Accepted events go to the journal and to live subscribers

pub mod journal;
pub mod stream;

pub use journal::{format_journal, query_journal, JournalEntry, JournalQuery};
pub use stream::EventStream;

use crate::ledger::{
    Account, Identity, LedgerError, LedgerResult, LedgerState, ProposalResults, ProposalStatus,
    Receipt, StateDigest, VoteRecord,
};
use crate::serialization::SerializationError;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

/// Capacity of the live event channel.
const EVENT_CHANNEL_CAPACITY: usize = 1024;

struct Inner {
    state: LedgerState,
    journal: Vec<JournalEntry>,
}

/// Shared handle to a ledger. Clones refer to the same ledger.
#[derive(Clone)]
pub struct LedgerEngine {
    inner: Arc<RwLock<Inner>>,
    events_tx: broadcast::Sender<JournalEntry>,
}

impl LedgerEngine {
    /// Create a ledger whose admin is pre-registered.
    pub fn new(admin: Identity) -> Self {
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        info!(admin = %admin.short(), "ledger initialised");

        Self {
            inner: Arc::new(RwLock::new(Inner {
                state: LedgerState::new(admin),
                journal: Vec::new(),
            })),
            events_tx,
        }
    }

    /// Run one transition under the write lock and commit its events.
    async fn commit<T>(
        &self,
        operation: &'static str,
        caller: &Identity,
        now: u64,
        transition: impl FnOnce(&mut LedgerState) -> LedgerResult<Receipt<T>>,
    ) -> LedgerResult<Receipt<T>> {
        let mut inner = self.inner.write().await;

        let receipt = match transition(&mut inner.state) {
            Ok(receipt) => receipt,
            Err(e) => {
                debug!(
                    operation,
                    caller = %caller.short(),
                    now,
                    reason = e.tag(),
                    "transition rejected"
                );
                return Err(e);
            }
        };

        for event in &receipt.events {
            let entry = JournalEntry {
                sequence: inner.journal.len() as u64,
                at: now,
                event: event.clone(),
            };
            // No subscribers is not an error
            let _ = self.events_tx.send(entry.clone());
            inner.journal.push(entry);
        }

        debug!(
            operation,
            caller = %caller.short(),
            now,
            events = receipt.events.len(),
            "transition committed"
        );
        Ok(receipt)
    }

    pub async fn register(
        &self,
        caller: Identity,
        initial_reputation: u64,
        now: u64,
    ) -> LedgerResult<Receipt<()>> {
        self.commit("register", &caller, now, |state| {
            state.register(caller, initial_reputation)
        })
        .await
    }

    /// Returns the new proposal id.
    pub async fn create_proposal(
        &self,
        caller: Identity,
        description: impl Into<String>,
        now: u64,
    ) -> LedgerResult<Receipt<u64>> {
        let description = description.into();
        self.commit("create_proposal", &caller, now, |state| {
            state.create_proposal(caller, description, now)
        })
        .await
    }

    /// Returns the weight the vote was counted with.
    pub async fn cast_vote(
        &self,
        caller: Identity,
        proposal_id: u64,
        support: bool,
        now: u64,
    ) -> LedgerResult<Receipt<u64>> {
        self.commit("cast_vote", &caller, now, |state| {
            state.cast_vote(caller, proposal_id, support, now)
        })
        .await
    }

    /// Admin-only direct reputation override. `now` only stamps the journal.
    pub async fn adjust_reputation(
        &self,
        caller: Identity,
        target: Identity,
        new_reputation: u64,
        now: u64,
    ) -> LedgerResult<Receipt<()>> {
        self.commit("adjust_reputation", &caller, now, |state| {
            state.adjust_reputation(caller, target, new_reputation)
        })
        .await
    }

    pub async fn admin(&self) -> Identity {
        *self.inner.read().await.state.admin()
    }

    pub async fn proposal_count(&self) -> u64 {
        self.inner.read().await.state.proposal_count()
    }

    pub async fn get_results(&self, proposal_id: u64) -> LedgerResult<ProposalResults> {
        self.inner.read().await.state.get_results(proposal_id)
    }

    pub async fn has_voted(&self, proposal_id: u64, identity: &Identity) -> LedgerResult<bool> {
        self.inner.read().await.state.has_voted(proposal_id, identity)
    }

    pub async fn vote_of(
        &self,
        proposal_id: u64,
        identity: &Identity,
    ) -> LedgerResult<Option<VoteRecord>> {
        self.inner.read().await.state.vote_of(proposal_id, identity)
    }

    pub async fn proposal_status(
        &self,
        proposal_id: u64,
        now: u64,
    ) -> LedgerResult<ProposalStatus> {
        self.inner.read().await.state.proposal_status(proposal_id, now)
    }

    pub async fn account(&self, identity: &Identity) -> Option<Account> {
        self.inner.read().await.state.account(identity).cloned()
    }

    /// Reputation of a registered identity.
    pub async fn reputation_of(&self, identity: &Identity) -> LedgerResult<u64> {
        self.inner
            .read()
            .await
            .state
            .reputation_of(identity)
            .ok_or(LedgerError::NotRegistered(*identity))
    }

    pub async fn voting_weight_of(&self, identity: &Identity) -> u64 {
        self.inner.read().await.state.voting_weight_of(identity)
    }

    /// Consistent copy of the whole state.
    pub async fn snapshot(&self) -> LedgerState {
        self.inner.read().await.state.clone()
    }

    pub async fn state_digest(&self) -> Result<StateDigest, SerializationError> {
        self.inner.read().await.state.state_digest()
    }

    pub async fn journal(&self, query: &JournalQuery) -> Vec<JournalEntry> {
        query_journal(&self.inner.read().await.journal, query)
    }

    pub async fn journal_len(&self) -> u64 {
        self.inner.read().await.journal.len() as u64
    }

    /// Subscribe to events committed from now on.
    pub fn subscribe(&self) -> EventStream {
        EventStream::new(self.events_tx.subscribe())
    }
}
