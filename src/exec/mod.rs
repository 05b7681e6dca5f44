// src/exec/mod.rs

//! Process execution harness.
//!
//! [`run`] spawns an external command, feeds its stdin, drains stdout and
//! stderr concurrently into separate buffers, optionally delivers an OS
//! signal once the child is running, and decodes termination into a
//! portable [`ProcessResult`].
//!
//! [`spawn`] is the fire-and-continue variant: the child keeps running with
//! its output draining in the background, and the caller decides when (or
//! whether) to wait. Either way the harness only reports the raw outcome;
//! whether a nonzero exit means failure is entirely the caller's business.

mod harness;
mod invocation;
mod result;

pub use harness::{RunningProcess, run, spawn};
pub use invocation::{DEFAULT_SIGNAL_SETTLE, Invocation, SignalRequest};
pub use result::{ExitDisposition, ProcessResult};

// Re-exported so callers can name signals without depending on nix.
pub use nix::sys::signal::Signal;
