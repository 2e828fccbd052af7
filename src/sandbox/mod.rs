//! Isolated-process execution of generated scripts.
//!
//! A script is never trusted: it is sanitized, written to a uniquely named
//! transient `.py` file, and run under a separate interpreter process with
//! captured output and a wall-clock bound. The transient file is owned by a
//! scoped [`tempfile::NamedTempFile`] handle, so it is removed on every exit
//! path out of [`Sandbox::execute`], including early `?` returns and the
//! timeout branch. A process still running when the bound expires is killed
//! via `kill_on_drop`.

use std::io::Write;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::Builder;
use tokio::process::Command;
use tokio::time::timeout;

use crate::script;

/// Terminal classification of one execution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecStatus {
    Success,
    Error,
    Timeout,
    /// The stage was never run because an upstream stage did not succeed.
    Skipped,
}

/// Immutable record of one sandboxed execution attempt.
///
/// `script_path` names the transient file the script ran from; by the time
/// the caller sees this record the file is already gone.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    pub status: ExecStatus,
    pub stdout: String,
    pub stderr: String,
    pub script_path: PathBuf,
}

impl ExecutionResult {
    pub fn skipped() -> Self {
        Self {
            status: ExecStatus::Skipped,
            stdout: String::new(),
            stderr: String::new(),
            script_path: PathBuf::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ExecStatus::Success
    }
}

#[derive(Debug, Clone)]
pub struct Sandbox {
    python: String,
    limit: Duration,
}

impl Sandbox {
    pub fn new(python: impl Into<String>, limit: Duration) -> Self {
        Self { python: python.into(), limit }
    }

    /// Runs `source` as a Python program and classifies the outcome.
    ///
    /// Script failures are data, not errors: a non-zero exit or an expired
    /// time bound comes back as an [`ExecutionResult`], never as `Err`.
    /// Only sandbox-internal faults (temp-file IO, spawn failure) are `Err`.
    pub async fn execute(&self, source: &str) -> Result<ExecutionResult> {
        let cleaned = script::sanitize(source);

        let mut file = Builder::new()
            .prefix("synthgen-")
            .suffix(".py")
            .tempfile()
            .context("failed to create transient script file")?;
        file.write_all(cleaned.as_bytes())
            .context("failed to write transient script file")?;
        file.flush().context("failed to flush transient script file")?;
        let script_path = file.path().to_path_buf();

        let child = Command::new(&self.python)
            .arg(&script_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn interpreter '{}'", self.python))?;

        match timeout(self.limit, child.wait_with_output()).await {
            Ok(output) => {
                let output = output.context("failed to collect script output")?;
                let status = if output.status.success() {
                    ExecStatus::Success
                } else {
                    ExecStatus::Error
                };
                Ok(ExecutionResult {
                    status,
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                    script_path,
                })
            }
            // Deadline expired: the wait future is dropped here, which kills
            // the child. Nothing was collected from the process in flight.
            Err(_) => Ok(ExecutionResult {
                status: ExecStatus::Timeout,
                stdout: String::new(),
                stderr: String::new(),
                script_path,
            }),
        }
    }
}
