// src/exec/result.rs

use std::borrow::Cow;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

/// Portable view of how a child terminated.
///
/// Raw platform status words never cross this boundary: a normal exit and a
/// signal death are reported distinctly, and a launch failure is an error
/// from the harness rather than a disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDisposition {
    /// Normal termination with the given exit code (0–255 on Unix).
    Exited(i32),
    /// Terminated by the given signal.
    Signaled(i32),
}

impl From<ExitStatus> for ExitDisposition {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => ExitDisposition::Exited(code),
            // A waited child on Unix either exited or died to a signal.
            None => ExitDisposition::Signaled(status.signal().unwrap_or(0)),
        }
    }
}

/// Structured outcome of one external command invocation.
///
/// stdout and stderr are captured into independent buffers and never
/// interleaved, even when the child writes to both at once. Immutable once
/// returned; interpretation (pass/fail, output assertions) belongs to the
/// caller.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub disposition: ExitDisposition,
}

impl ProcessResult {
    /// True only for a normal exit with code zero.
    pub fn success(&self) -> bool {
        self.disposition == ExitDisposition::Exited(0)
    }

    /// Exit code for a normal termination; `None` when killed by a signal.
    pub fn code(&self) -> Option<i32> {
        match self.disposition {
            ExitDisposition::Exited(code) => Some(code),
            ExitDisposition::Signaled(_) => None,
        }
    }

    /// Terminating signal, if any.
    pub fn signal(&self) -> Option<i32> {
        match self.disposition {
            ExitDisposition::Exited(_) => None,
            ExitDisposition::Signaled(signal) => Some(signal),
        }
    }

    pub fn stdout_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    pub fn stderr_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }
}
