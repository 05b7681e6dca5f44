// src/matcher/mod.rs

//! Expectation matcher over job lifecycle events.
//!
//! The deterministic counting logic lives in [`state`] and is unit tested
//! without any Tokio, channels, or IO; the async, deadline-bounded shell is
//! implemented in [`wait`].

mod state;
mod wait;

pub use state::{ExpectationState, ExpectationTable, Expected, OutstandingCounts};
pub use wait::wait_for_events;

use crate::types::{JobId, JobType};

/// Identifying information about the last event that satisfied part of an
/// expectation table.
///
/// Scenarios feed these ids into follow-up commands, e.g. killing the job
/// that just came up and then waiting for its `down` transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedEvent {
    pub job_id: JobId,
    pub job_type: JobType,
}
