//! Append-only event journal.
//!
//! - Every accepted transition appends its events, in emission order
//! - Sequence numbers start at 0 and have no gaps
//! - Entries are never modified or removed
//! - Queries filter by kind, identity, proposal and sequence

use crate::ledger::{EventKind, Identity, LedgerEvent};
use serde::{Deserialize, Serialize};

/// Single journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Position in the journal.
    pub sequence: u64,
    /// Logical time of the transaction that emitted the event.
    pub at: u64,
    pub event: LedgerEvent,
}

/// Query options for the journal.
#[derive(Debug, Clone)]
pub struct JournalQuery {
    /// Filter by event kind.
    pub kind: Option<EventKind>,
    /// Filter by identity (any role).
    pub identity: Option<Identity>,
    /// Filter by proposal.
    pub proposal_id: Option<u64>,
    /// Only entries with a sequence strictly greater than this.
    pub after_sequence: Option<u64>,
    /// Keep only the most recent N matches.
    pub limit: Option<usize>,
}

impl Default for JournalQuery {
    fn default() -> Self {
        Self {
            kind: None,
            identity: None,
            proposal_id: None,
            after_sequence: None,
            limit: Some(50),
        }
    }
}

impl JournalQuery {
    /// Query matching every entry.
    pub fn all() -> Self {
        Self {
            limit: None,
            ..Self::default()
        }
    }

    fn matches(&self, entry: &JournalEntry) -> bool {
        if let Some(kind) = self.kind {
            if entry.event.kind() != kind {
                return false;
            }
        }

        if let Some(ref identity) = self.identity {
            if !entry.event.involves(identity) {
                return false;
            }
        }

        if let Some(proposal_id) = self.proposal_id {
            if entry.event.proposal_id() != Some(proposal_id) {
                return false;
            }
        }

        if let Some(after) = self.after_sequence {
            if entry.sequence <= after {
                return false;
            }
        }

        true
    }
}

/// Query journal entries.
///
/// Returns matches in chronological order; `limit` keeps the newest.
pub fn query_journal(entries: &[JournalEntry], query: &JournalQuery) -> Vec<JournalEntry> {
    let filtered: Vec<&JournalEntry> = entries.iter().filter(|e| query.matches(e)).collect();

    let skip = match query.limit {
        Some(limit) => filtered.len().saturating_sub(limit),
        None => 0,
    };

    filtered.into_iter().skip(skip).cloned().collect()
}

/// Format journal entries for terminal display.
pub fn format_journal(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No journal entries.".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "#{:<5} t={:<12} {}\n",
            entry.sequence, entry.at, entry.event
        ));
    }
    output
}
