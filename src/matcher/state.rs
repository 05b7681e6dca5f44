// src/matcher/state.rs

//! Pure expectation bookkeeping.
//!
//! No channels, no Tokio types, no IO: just the counting rules applied to
//! one event at a time, so the semantics can be tested deterministically.

use std::collections::BTreeMap;
use std::fmt;

use super::MatchedEvent;
use crate::events::JobEvent;
use crate::types::{JobState, JobType};

/// Required transition counts for one job type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Expected {
    pub up: u32,
    pub down: u32,
}

impl Expected {
    pub fn new(up: u32, down: u32) -> Self {
        Self { up, down }
    }

    fn is_zero(&self) -> bool {
        self.up == 0 && self.down == 0
    }
}

/// Caller-supplied table of required `up`/`down` counts per job type.
///
/// Built fresh per wait. The matcher clones it into internal working state
/// ([`ExpectationState`]) and never mutates the caller's copy. Counts are
/// `u32`, so non-negativity holds by construction.
#[derive(Debug, Clone, Default)]
pub struct ExpectationTable {
    entries: BTreeMap<JobType, Expected>,
}

impl ExpectationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the expected counts for a job type. Chainable.
    pub fn expect(mut self, job_type: impl Into<JobType>, up: u32, down: u32) -> Self {
        self.entries.insert(job_type.into(), Expected::new(up, down));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&JobType, &Expected)> {
        self.entries.iter()
    }
}

/// Working state of one wait: the table's counters, decremented as matching
/// events arrive, plus the most recent match.
#[derive(Debug)]
pub struct ExpectationState {
    outstanding: BTreeMap<JobType, Expected>,
    last_match: Option<MatchedEvent>,
}

impl ExpectationState {
    /// Clone a table into working counters.
    ///
    /// Entries that are already fully zero are dropped up front, so an
    /// all-zero (or empty) table starts satisfied and a wait over it
    /// completes without consuming any event.
    pub fn new(table: &ExpectationTable) -> Self {
        let outstanding = table
            .entries
            .iter()
            .filter(|(_, expected)| !expected.is_zero())
            .map(|(job_type, expected)| (job_type.clone(), *expected))
            .collect();
        Self {
            outstanding,
            last_match: None,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.outstanding.is_empty()
    }

    /// Apply one event; returns true if it decremented a counter.
    ///
    /// Untracked job types, non-`up`/`down` states and matching events
    /// beyond the requested counts are all ignored: the platform routinely
    /// emits more churn than a test asked for, and benign extra activity
    /// must not fail the wait. Missing activity still surfaces as a timeout
    /// in the shell.
    pub fn apply(&mut self, event: &JobEvent) -> bool {
        let entry_satisfied;
        {
            let Some(expected) = self.outstanding.get_mut(&event.job_type) else {
                return false;
            };
            let counter = match event.state {
                JobState::Up => &mut expected.up,
                JobState::Down => &mut expected.down,
                JobState::Other(_) => return false,
            };
            if *counter == 0 {
                // saturating: over-quota events are consumed, not errors
                return false;
            }
            *counter -= 1;
            entry_satisfied = expected.is_zero();
        }

        self.last_match = Some(MatchedEvent {
            job_id: event.job_id.clone(),
            job_type: event.job_type.clone(),
        });
        if entry_satisfied {
            self.outstanding.remove(&event.job_type);
        }
        true
    }

    pub fn last_match(&self) -> Option<&MatchedEvent> {
        self.last_match.as_ref()
    }

    pub fn into_last_match(self) -> Option<MatchedEvent> {
        self.last_match
    }

    /// Snapshot of the unmet counts, for timeout diagnostics.
    pub fn outstanding(&self) -> OutstandingCounts {
        OutstandingCounts(self.outstanding.clone())
    }
}

/// Unmet per-type counts at the moment a wait gave up, formatted like
/// `worker: up=0 down=1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutstandingCounts(BTreeMap<JobType, Expected>);

impl OutstandingCounts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, job_type: &str) -> Option<Expected> {
        self.0.get(job_type).copied()
    }
}

impl fmt::Display for OutstandingCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(none)");
        }
        for (i, (job_type, expected)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{job_type}: up={} down={}", expected.up, expected.down)?;
        }
        Ok(())
    }
}
