// src/lib.rs

//! Verification core for asserting that an externally-driven platform
//! performs the lifecycle transitions a test expects.
//!
//! Two engines do the actual work:
//! - the [`matcher`] consumes an ordered stream of job lifecycle events and
//!   decides, within a bounded wait, whether a caller-supplied table of
//!   expected `up`/`down` transition counts has been satisfied;
//! - the [`exec`] harness launches external command invocations, captures
//!   stdout/stderr without interleaving, optionally delivers a signal to the
//!   running child, and decodes termination into a portable result.
//!
//! Everything else ([`cli`], [`config`], [`assert`]) is glue that feeds
//! commands into this core or consumes its structured results.

pub mod assert;
pub mod cli;
pub mod config;
pub mod errors;
pub mod events;
pub mod exec;
pub mod logging;
pub mod matcher;
pub mod stream;
pub mod types;

pub use cli::CliClient;
pub use events::JobEvent;
pub use exec::{Invocation, ProcessResult, Signal, run, spawn};
pub use matcher::{ExpectationTable, MatchedEvent, wait_for_events};
pub use stream::JobEventStream;
pub use types::JobState;
