// src/utils/shell.rs
use std::io;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, trace, warn};

/// What a finished child process left behind
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    pub success: bool,
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    /// Empty when stderr is inherited by the parent
    pub stderr: Vec<u8>,
}

/// Runs an external program to completion.
///
/// Spawn failures keep their `io::ErrorKind` so callers can tell a missing
/// executable apart from other failures. An elapsed `timeout` is reported as
/// `io::ErrorKind::TimedOut`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        timeout: Option<Duration>,
    ) -> io::Result<ProcessOutput>;
}

/// Runs programs as tokio child processes.
///
/// stdout is captured, stderr is inherited so the tool's own diagnostics stay
/// visible, and stdin is closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        timeout: Option<Duration>,
    ) -> io::Result<ProcessOutput> {
        debug!("Executing command: {} {:?}", program.display(), args);

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()?;

        // Dropping the future on timeout drops the child, which kills it.
        let output = match timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(result) => result?,
                Err(_) => {
                    warn!("Command timed out after {:?}: {}", limit, program.display());
                    return Err(io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("{} did not finish within {:?}", program.display(), limit),
                    ));
                }
            },
            None => child.wait_with_output().await?,
        };

        if output.status.success() {
            trace!("Command succeeded: {}", program.display());
        } else {
            warn!("Command failed: {} ({})", program.display(), output.status);
        }

        Ok(ProcessOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_captures_stdout() {
        let output = TokioProcessRunner::new()
            .run(Path::new("sh"), &args(&["-c", "printf 'a.example.com\\nb.example.com\\n'"]), None)
            .await
            .unwrap();

        assert!(output.success);
        assert_eq!(output.code, Some(0));
        assert_eq!(output.stdout, b"a.example.com\nb.example.com\n");
        assert!(output.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_reports_non_zero_exit() {
        let output = TokioProcessRunner::new()
            .run(Path::new("sh"), &args(&["-c", "echo partial.example.com; exit 1"]), None)
            .await
            .unwrap();

        assert!(!output.success);
        assert_eq!(output.code, Some(1));
    }

    #[tokio::test]
    async fn test_missing_program_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("subfinder");

        let err = TokioProcessRunner::new()
            .run(&missing, &args(&["-d", "example.com"]), None)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_timeout_elapses() {
        let err = TokioProcessRunner::new()
            .run(Path::new("sh"), &args(&["-c", "sleep 5"]), Some(Duration::from_millis(100)))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    }

    #[tokio::test]
    async fn test_argument_is_not_split_by_shell() {
        let output = TokioProcessRunner::new()
            .run(Path::new("sh"), &args(&["-c", "printf '%s' \"$1\"", "sh", "a b; c"]), None)
            .await
            .unwrap();

        assert_eq!(output.stdout, b"a b; c");
    }
}
