// src/stream.rs

//! Handle over a long-lived, per-application job event stream.
//!
//! The stream itself is owned and produced by an external platform client;
//! this module only defines the receiving handle the matcher consumes. One
//! handle is shared across sequential waits within a scenario and is never
//! drained or reset by the matcher, so events that arrive after a timeout
//! stay buffered for the next wait.
//!
//! Single-consumer discipline: [`JobEventStream::recv`] takes `&mut self`,
//! so two concurrent waits on the same handle are rejected at compile time.
//! No ordering guarantee exists across different applications' streams.

use tokio::sync::mpsc;

use crate::events::JobEvent;
use crate::types::AppId;

/// Receiving handle of one application's event stream.
#[derive(Debug)]
pub struct JobEventStream {
    app_id: AppId,
    rx: mpsc::UnboundedReceiver<JobEvent>,
}

impl JobEventStream {
    /// Wrap a receiver produced by a platform client.
    pub fn new(app_id: impl Into<AppId>, rx: mpsc::UnboundedReceiver<JobEvent>) -> Self {
        Self {
            app_id: app_id.into(),
            rx,
        }
    }

    /// Create a connected (sender, stream) pair.
    ///
    /// The sending half belongs to whatever produces events (a platform
    /// client in production, a fixture in tests). The channel is unbounded
    /// so producers never block on a consumer that is between waits.
    pub fn channel(app_id: impl Into<AppId>) -> (mpsc::UnboundedSender<JobEvent>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self::new(app_id, rx))
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Receive the next event; `None` once the stream has closed.
    pub async fn recv(&mut self) -> Option<JobEvent> {
        self.rx.recv().await
    }
}
