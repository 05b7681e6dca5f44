#![allow(dead_code)]

use jobwatch::events::JobEvent;
use jobwatch::exec::Invocation;
use jobwatch::matcher::ExpectationTable;
use jobwatch::stream::JobEventStream;
use jobwatch::types::JobState;
use tokio::sync::mpsc::UnboundedSender;

/// Expectation table from `(job_type, up, down)` triples.
pub fn expectation(entries: &[(&str, u32, u32)]) -> ExpectationTable {
    entries
        .iter()
        .fold(ExpectationTable::new(), |table, (job_type, up, down)| {
            table.expect(*job_type, *up, *down)
        })
}

pub fn up_event(job_id: &str, job_type: &str, app: &str) -> JobEvent {
    JobEvent::new(job_id, job_type, app, JobState::Up)
}

pub fn down_event(job_id: &str, job_type: &str, app: &str) -> JobEvent {
    JobEvent::new(job_id, job_type, app, JobState::Down)
}

/// Event with an arbitrary platform state string (e.g. `"crashed"`).
pub fn other_event(job_id: &str, job_type: &str, app: &str, state: &str) -> JobEvent {
    JobEvent::new(job_id, job_type, app, JobState::from(state.to_string()))
}

/// A connected stream preloaded with `events`.
///
/// The returned sender keeps the stream open, so waits that exhaust the
/// preloaded events time out instead of observing closure. Drop it to
/// simulate the platform client going away.
pub fn scripted_stream(
    app: &str,
    events: Vec<JobEvent>,
) -> (UnboundedSender<JobEvent>, JobEventStream) {
    let (tx, stream) = JobEventStream::channel(app);
    for event in events {
        tx.send(event).expect("stream receiver alive");
    }
    (tx, stream)
}

/// `sh -c <script>` invocation.
pub fn sh(script: &str) -> Invocation {
    Invocation::new("sh").arg("-c").arg(script)
}
