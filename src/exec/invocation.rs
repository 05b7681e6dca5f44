// src/exec/invocation.rs

use std::path::PathBuf;
use std::time::Duration;

use super::Signal;

/// Default settle delay applied before a requested signal is delivered.
pub const DEFAULT_SIGNAL_SETTLE: Duration = Duration::from_millis(150);

/// Request to deliver `signal` to the child once it is running.
///
/// Best effort: there is no readiness channel between parent and child, so
/// a short script's trap installation races the delivery. The `settle`
/// delay keeps that race from being lost in practice, but delivery after
/// trap installation is a documented weak guarantee, not an invariant.
#[derive(Debug, Clone, Copy)]
pub struct SignalRequest {
    pub signal: Signal,
    pub settle: Duration,
}

/// One external command invocation: argument vector, working directory,
/// environment overlay, optional stdin payload and optional signal request.
///
/// Constructed per invocation and consumed by [`run`](super::run) or
/// [`spawn`](super::spawn); discarded once the result is produced.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub(crate) program: String,
    pub(crate) args: Vec<String>,
    pub(crate) current_dir: Option<PathBuf>,
    pub(crate) envs: Vec<(String, String)>,
    pub(crate) stdin: Option<Vec<u8>>,
    pub(crate) signal: Option<SignalRequest>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            envs: Vec::new(),
            stdin: None,
            signal: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Payload for the child's stdin.
    ///
    /// A dedicated writer feeds it in as many writes as the pipe needs and
    /// closes the pipe afterwards, so a child blocked on end-of-input
    /// unblocks.
    pub fn stdin_bytes(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(payload.into());
        self
    }

    /// Deliver `signal` after [`DEFAULT_SIGNAL_SETTLE`] once the child is
    /// running. See [`SignalRequest`] for the best-effort caveat.
    pub fn signal_after_start(self, signal: Signal) -> Self {
        self.signal_after_start_with_settle(signal, DEFAULT_SIGNAL_SETTLE)
    }

    pub fn signal_after_start_with_settle(mut self, signal: Signal, settle: Duration) -> Self {
        self.signal = Some(SignalRequest { signal, settle });
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}
