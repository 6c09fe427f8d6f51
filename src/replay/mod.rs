//! Transaction scripts replayed through a [`LedgerEngine`].
//!
//! A script is a TOML document:
//!
//! ```toml
//! start = 0
//!
//! [[step]]
//! op = "register"
//! caller = "alice"
//! reputation = 10
//!
//! [[step]]
//! op = "propose"
//! caller = "alice"
//! description = "Fund the docs sprint"
//! advance = "1h"
//!
//! [[step]]
//! op = "vote"
//! caller = "admin"
//! proposal = 0
//! support = true
//! ```
//!
//! Callers are labels hashed with [`Identity::from_label`]. The logical clock
//! starts at `start`; a step may move it with `at` (absolute) or `advance`
//! (a humantime duration). It never moves backwards.

use crate::engine::LedgerEngine;
use crate::ledger::{Identity, LedgerError, LedgerEvent, Receipt, StateDigest};
use crate::serialization::SerializationError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Script loading and execution errors.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("step {step}: missing field '{field}' for op '{op}'")]
    MissingField {
        step: usize,
        op: &'static str,
        field: &'static str,
    },

    #[error("step {step}: invalid duration '{input}': {reason}")]
    InvalidAdvance {
        step: usize,
        input: String,
        reason: String,
    },

    #[error("step {step}: set both 'at' and 'advance'")]
    AmbiguousTime { step: usize },

    #[error("step {step}: clock would move backwards from {now} to {at}")]
    ClockWentBackwards { step: usize, now: u64, at: u64 },

    #[error("failed to digest final state: {0}")]
    Digest(#[from] SerializationError),
}

/// Transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Register,
    Propose,
    Vote,
    Adjust,
}

impl Op {
    fn name(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Propose => "propose",
            Self::Vote => "vote",
            Self::Adjust => "adjust",
        }
    }
}

/// One scripted transaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub op: Op,
    pub caller: String,
    /// register: initial reputation; adjust: new reputation.
    pub reputation: Option<u64>,
    pub description: Option<String>,
    pub proposal: Option<u64>,
    pub support: Option<bool>,
    pub target: Option<String>,
    pub at: Option<u64>,
    pub advance: Option<String>,
}

/// A parsed script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub start: u64,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// Result of one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepResult {
    Accepted {
        /// Proposal id (propose) or vote weight (vote).
        value: Option<u64>,
        events: Vec<LedgerEvent>,
    },
    Rejected {
        error: &'static str,
        message: String,
    },
}

/// Record of one replayed step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    pub step: usize,
    pub op: Op,
    pub caller: String,
    pub now: u64,
    pub result: StepResult,
}

/// Result of a whole replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub outcomes: Vec<StepOutcome>,
    pub final_now: u64,
    pub digest: StateDigest,
}

impl ReplayReport {
    pub fn accepted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, StepResult::Accepted { .. }))
            .count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.accepted()
    }
}

impl Script {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }
}

impl Step {
    /// Logical time for this step given the running clock.
    fn resolve_time(&self, step: usize, now: u64) -> Result<u64, ScriptError> {
        match (self.at, &self.advance) {
            (Some(_), Some(_)) => Err(ScriptError::AmbiguousTime { step }),
            (Some(at), None) if at < now => {
                Err(ScriptError::ClockWentBackwards { step, now, at })
            }
            (Some(at), None) => Ok(at),
            (None, Some(input)) => {
                let invalid = |reason: String| ScriptError::InvalidAdvance {
                    step,
                    input: input.clone(),
                    reason,
                };
                let duration =
                    humantime::parse_duration(input).map_err(|e| invalid(e.to_string()))?;
                // Logical time is whole seconds
                if duration.subsec_nanos() != 0 {
                    return Err(invalid("must be a whole number of seconds".to_string()));
                }
                Ok(now.saturating_add(duration.as_secs()))
            }
            (None, None) => Ok(now),
        }
    }

    fn require<T: Clone>(
        &self,
        step: usize,
        value: &Option<T>,
        field: &'static str,
    ) -> Result<T, ScriptError> {
        value.clone().ok_or(ScriptError::MissingField {
            step,
            op: self.op.name(),
            field,
        })
    }
}

fn to_result<T: Into<Option<u64>>>(outcome: Result<Receipt<T>, LedgerError>) -> StepResult {
    match outcome {
        Ok(receipt) => StepResult::Accepted {
            value: receipt.value.into(),
            events: receipt.events,
        },
        Err(e) => StepResult::Rejected {
            error: e.tag(),
            message: e.to_string(),
        },
    }
}

/// Replay every step in order. Ledger rejections are recorded, not fatal;
/// malformed steps abort the replay.
pub async fn run_script(
    engine: &LedgerEngine,
    script: &Script,
) -> Result<ReplayReport, ScriptError> {
    let mut now = script.start;
    let mut outcomes = Vec::with_capacity(script.steps.len());

    for (index, step) in script.steps.iter().enumerate() {
        now = step.resolve_time(index, now)?;
        let caller = Identity::from_label(&step.caller);

        let result = match step.op {
            Op::Register => {
                let reputation = step.require(index, &step.reputation, "reputation")?;
                to_result(engine.register(caller, reputation, now).await.map(unit_receipt))
            }
            Op::Propose => {
                let description = step.require(index, &step.description, "description")?;
                to_result(engine.create_proposal(caller, description, now).await)
            }
            Op::Vote => {
                let proposal = step.require(index, &step.proposal, "proposal")?;
                let support = step.require(index, &step.support, "support")?;
                to_result(engine.cast_vote(caller, proposal, support, now).await)
            }
            Op::Adjust => {
                let target = step.require(index, &step.target, "target")?;
                let reputation = step.require(index, &step.reputation, "reputation")?;
                let target = Identity::from_label(&target);
                to_result(
                    engine
                        .adjust_reputation(caller, target, reputation, now)
                        .await
                        .map(unit_receipt),
                )
            }
        };

        outcomes.push(StepOutcome {
            step: index,
            op: step.op,
            caller: step.caller.clone(),
            now,
            result,
        });
    }

    let report = ReplayReport {
        outcomes,
        final_now: now,
        digest: engine.state_digest().await?,
    };
    info!(
        steps = report.outcomes.len(),
        accepted = report.accepted(),
        rejected = report.rejected(),
        digest = %report.digest,
        "replay finished"
    );
    Ok(report)
}

fn unit_receipt(receipt: Receipt<()>) -> Receipt<Option<u64>> {
    Receipt::new(None, receipt.events)
}
