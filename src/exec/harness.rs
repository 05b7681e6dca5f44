// src/exec/harness.rs

//! Spawning, stdio plumbing and signal delivery.

use std::process::Stdio;

use nix::sys::signal;
use nix::unistd::Pid;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::{ExitDisposition, Invocation, ProcessResult, Signal, SignalRequest};
use crate::errors::{JobwatchError, Result};

/// Run `invocation` to completion and decode the outcome.
///
/// Blocks until the child has exited **and** both output pipes have been
/// drained to end-of-stream. Launch failure (binary not found, permission
/// denied) is fatal and surfaces as [`JobwatchError::Spawn`]; a nonzero
/// exit or signal death is data in the returned [`ProcessResult`], never an
/// error.
pub async fn run(invocation: Invocation) -> Result<ProcessResult> {
    spawn(invocation)?.wait().await
}

/// Spawn `invocation` and return a handle to the running child.
///
/// stdout and stderr start draining into background buffers immediately,
/// each on its own task with its own exclusively-owned buffer, so the child
/// never blocks on a full pipe no matter when (or whether) the caller
/// waits. If the invocation carries a signal request, delivery is scheduled
/// after its settle delay.
pub fn spawn(invocation: Invocation) -> Result<RunningProcess> {
    let Invocation {
        program,
        args,
        current_dir,
        envs,
        stdin,
        signal: signal_request,
    } = invocation;

    let mut cmd = Command::new(&program);
    cmd.args(&args)
        .envs(envs)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = current_dir {
        cmd.current_dir(dir);
    }

    let mut child = cmd.spawn().map_err(|source| JobwatchError::Spawn {
        program: program.clone(),
        source,
    })?;
    let pid = child.id();
    info!(program = %program, pid, "spawned process");

    if let Some(payload) = stdin {
        match child.stdin.take() {
            Some(mut handle) => {
                let prog = program.clone();
                tokio::spawn(async move {
                    // write_all copes with payloads larger than one pipe
                    // write; dropping the handle afterwards closes the pipe
                    // so the child sees end-of-input.
                    if let Err(e) = handle.write_all(&payload).await {
                        warn!(program = %prog, error = %e, "failed to write stdin payload");
                    }
                });
            }
            None => warn!(program = %program, "stdin payload supplied but no pipe available"),
        }
    }

    let stdout_task = drain_pipe(child.stdout.take(), "stdout", program.clone());
    let stderr_task = drain_pipe(child.stderr.take(), "stderr", program.clone());

    if let Some(request) = signal_request {
        schedule_signal(pid, request, &program);
    }

    Ok(RunningProcess {
        child,
        stdout_task,
        stderr_task,
        program,
    })
}

/// Handle to a spawned child and its stdio plumbing.
///
/// Dropping the handle without waiting kills the child
/// (`kill_on_drop(true)` on the underlying command).
pub struct RunningProcess {
    child: tokio::process::Child,
    stdout_task: JoinHandle<Vec<u8>>,
    stderr_task: JoinHandle<Vec<u8>>,
    program: String,
}

impl RunningProcess {
    /// OS pid, while the child has not been reaped.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Deliver `sig` to the child right now. Best effort: the child may
    /// already be gone, or may not have installed a handler yet.
    pub fn signal(&self, sig: Signal) -> Result<()> {
        let Some(pid) = self.child.id() else {
            return Err(anyhow::anyhow!("process '{}' has already exited", self.program).into());
        };
        signal::kill(Pid::from_raw(pid as i32), sig)
            .map_err(|e| anyhow::anyhow!("kill({pid}, {sig}): {e}").into())
    }

    /// Wait for the child to exit, then join both pipe readers and combine
    /// their buffers into a [`ProcessResult`].
    ///
    /// Returns only after stdout and stderr have hit end-of-stream, so the
    /// buffers are complete even for output written just before exit.
    pub async fn wait(mut self) -> Result<ProcessResult> {
        let status = self.child.wait().await?;
        let stdout = join_drained(self.stdout_task, "stdout", &self.program).await;
        let stderr = join_drained(self.stderr_task, "stderr", &self.program).await;

        let disposition = ExitDisposition::from(status);
        info!(
            program = %self.program,
            ?disposition,
            stdout_len = stdout.len(),
            stderr_len = stderr.len(),
            "process finished"
        );

        Ok(ProcessResult {
            stdout,
            stderr,
            disposition,
        })
    }
}

/// Schedule best-effort delivery of a requested signal.
///
/// There is no readiness channel between parent and child, so the settle
/// delay gives a short script time to install its trap handler before the
/// signal lands.
fn schedule_signal(pid: Option<u32>, request: SignalRequest, program: &str) {
    let Some(pid) = pid else {
        warn!(program = %program, "signal requested but child has no pid");
        return;
    };
    let prog = program.to_string();
    tokio::spawn(async move {
        sleep(request.settle).await;
        match signal::kill(Pid::from_raw(pid as i32), request.signal) {
            Ok(()) => {
                debug!(program = %prog, pid, signal = %request.signal, "delivered signal")
            }
            Err(e) => {
                warn!(
                    program = %prog,
                    pid,
                    signal = %request.signal,
                    error = %e,
                    "failed to deliver signal"
                )
            }
        }
    });
}

/// Drain one output pipe to end-of-stream on a background task.
///
/// Each reader exclusively owns its buffer, so stdout and stderr cannot
/// contaminate each other and neither pipe can fill up while the other is
/// being read. A mid-stream read error keeps whatever was captured before
/// it.
fn drain_pipe<R>(pipe: Option<R>, label: &'static str, program: String) -> JoinHandle<Vec<u8>>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        let Some(mut pipe) = pipe else {
            return buf;
        };
        let mut chunk = [0u8; 4096];
        loop {
            match pipe.read(&mut chunk).await {
                Ok(0) => break,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                Err(e) => {
                    warn!(program = %program, pipe = label, error = %e, "read error on pipe; keeping partial output");
                    break;
                }
            }
        }
        buf
    })
}

async fn join_drained(task: JoinHandle<Vec<u8>>, label: &'static str, program: &str) -> Vec<u8> {
    match task.await {
        Ok(buf) => buf,
        Err(e) => {
            warn!(program = %program, pipe = label, error = %e, "pipe reader task failed");
            Vec::new()
        }
    }
}
