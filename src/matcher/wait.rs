// src/matcher/wait.rs

//! Deadline-bounded wait over a job event stream.

use std::time::Duration;

use tokio::time::{Instant, timeout_at};
use tracing::{debug, info, warn};

use super::{ExpectationState, ExpectationTable, MatchedEvent};
use crate::errors::{JobwatchError, Result};
use crate::stream::JobEventStream;

/// Block until every count in `table` has been observed on `stream`, or
/// until `timeout` elapses.
///
/// Matching rules:
/// - events for job types the table does not name, events with states other
///   than `up`/`down`, and matching events beyond the requested counts are
///   consumed and ignored;
/// - the wait completes once every per-type `up`/`down` count has reached
///   zero, returning the `(job_id, job_type)` of the last event that
///   decremented a counter.
///
/// An all-zero (or empty) table completes immediately without consuming any
/// event and returns `Ok(None)`; every other completion returns `Ok(Some)`.
///
/// On timeout the error names the outstanding per-type counts and the
/// stream is left untouched: it is a long-lived handle reused by later
/// waits, so events that arrive late stay buffered for the next call. A
/// stream that closes mid-wait is reported as
/// [`JobwatchError::StreamClosed`], distinct from a timeout.
///
/// The matcher is purely reactive: it never polls platform state or
/// re-requests events, and relies on the stream's per-application ordering.
pub async fn wait_for_events(
    stream: &mut JobEventStream,
    table: &ExpectationTable,
    timeout: Duration,
) -> Result<Option<MatchedEvent>> {
    let mut state = ExpectationState::new(table);
    let deadline = Instant::now() + timeout;

    debug!(
        app = %stream.app_id(),
        expecting = %state.outstanding(),
        ?timeout,
        "waiting for job events"
    );

    while !state.is_satisfied() {
        let event = match timeout_at(deadline, stream.recv()).await {
            Ok(Some(event)) => event,
            Ok(None) => {
                let outstanding = state.outstanding();
                warn!(app = %stream.app_id(), %outstanding, "job event stream closed mid-wait");
                return Err(JobwatchError::StreamClosed { outstanding });
            }
            Err(_elapsed) => {
                let outstanding = state.outstanding();
                warn!(
                    app = %stream.app_id(),
                    %outstanding,
                    ?timeout,
                    "timed out waiting for job events"
                );
                return Err(JobwatchError::ExpectationTimeout {
                    waited: timeout,
                    outstanding,
                });
            }
        };

        let matched = state.apply(&event);
        debug!(
            app = %stream.app_id(),
            job_id = %event.job_id,
            job_type = %event.job_type,
            state = %event.state,
            matched,
            "received job event"
        );
    }

    let last = state.into_last_match();
    info!(app = %stream.app_id(), last_match = ?last, "expectation satisfied");
    Ok(last)
}
