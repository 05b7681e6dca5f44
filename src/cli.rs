// src/cli.rs

//! Thin invoker for the platform CLI under test.
//!
//! Turns a logical command (subcommand + flags + target application) into an
//! [`Invocation`] and delegates to the process harness. Subcommand semantics
//! and argument grammar belong to the platform CLI itself; this layer only
//! owns argument-vector assembly and environment isolation.

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::exec::{self, Invocation, ProcessResult};

/// Builder/runner for invocations of one CLI binary.
///
/// Each scenario typically constructs its own client pointing at a private
/// cluster config file via [`with_config_file`](Self::with_config_file), so
/// concurrent scenarios never share CLI state.
#[derive(Debug, Clone)]
pub struct CliClient {
    bin: PathBuf,
    dir: PathBuf,
    envs: Vec<(String, String)>,
}

impl CliClient {
    /// A client for `bin`, running from the filesystem root by default so
    /// results never depend on the scenario's working directory.
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            dir: PathBuf::from("/"),
            envs: Vec::new(),
        }
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Point the CLI at a private config file through the environment
    /// variable `var`.
    pub fn with_config_file(self, var: impl Into<String>, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().display().to_string();
        self.with_env(var, path)
    }

    /// Assemble the invocation for `bin args...`.
    pub fn invocation(&self, args: &[&str]) -> Invocation {
        let mut inv = Invocation::new(self.bin.display().to_string()).current_dir(self.dir.clone());
        for (key, value) in &self.envs {
            inv = inv.env(key, value);
        }
        inv.args(args.iter().copied())
    }

    /// Assemble `bin -a <app> args...`, targeting one application.
    pub fn invocation_for_app(&self, app: &str, args: &[&str]) -> Invocation {
        let mut all = vec!["-a", app];
        all.extend_from_slice(args);
        self.invocation(&all)
    }

    /// Run `bin args...` to completion.
    pub async fn run(&self, args: &[&str]) -> Result<ProcessResult> {
        exec::run(self.invocation(args)).await
    }

    /// Run `bin -a <app> args...` to completion.
    pub async fn run_for_app(&self, app: &str, args: &[&str]) -> Result<ProcessResult> {
        exec::run(self.invocation_for_app(app, args)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_target_flag_is_prepended() {
        let cli = CliClient::new("/usr/bin/platform");
        let inv = cli.invocation_for_app("my-app", &["scale", "worker=3"]);
        assert_eq!(inv.args, vec!["-a", "my-app", "scale", "worker=3"]);
    }

    #[test]
    fn config_file_binding_becomes_env() {
        let cli = CliClient::new("platform").with_config_file("PLATFORMRC", "/tmp/rc.toml");
        let inv = cli.invocation(&["apps"]);
        assert!(
            inv.envs
                .iter()
                .any(|(k, v)| k == "PLATFORMRC" && v == "/tmp/rc.toml")
        );
    }

    #[test]
    fn default_working_directory_is_root() {
        let cli = CliClient::new("platform");
        let inv = cli.invocation(&[]);
        assert_eq!(inv.current_dir, Some(PathBuf::from("/")));
    }
}
