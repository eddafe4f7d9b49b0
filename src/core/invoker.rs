// src/core/invoker.rs
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, debug, error};

use crate::core::subdomains::RawOutput;
use crate::error::{SubhuntResult, SubhuntError};
use crate::utils::shell::ProcessRunner;

/// Flag the enumeration tool takes the target domain with
pub const DOMAIN_FLAG: &str = "-d";

/// Runs the external enumeration tool against a single domain
pub struct Invoker {
    executable: PathBuf,
    timeout: Option<Duration>,
    runner: Arc<dyn ProcessRunner>,
}

impl Invoker {
    /// Create an invoker that waits for the tool without a time limit
    pub fn new(executable: impl Into<PathBuf>, runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            executable: executable.into(),
            timeout: None,
            runner,
        }
    }

    /// Kill the tool and fail if it runs longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Argument vector for `domain`. The domain is one element, never split.
    pub fn build_args(domain: &str) -> Vec<String> {
        vec![DOMAIN_FLAG.to_string(), domain.to_string()]
    }

    /// Run the tool and return its stdout.
    ///
    /// Output from a tool that exits unsuccessfully is discarded.
    pub async fn invoke(&self, domain: &str) -> SubhuntResult<RawOutput> {
        let args = Self::build_args(domain);
        info!("Running {} against {}", self.tool_name(), domain);

        let output = self.runner
            .run(&self.executable, &args, self.timeout)
            .await
            .map_err(|e| self.classify_error(e))?;

        if !output.success {
            debug!("Discarding {} bytes of stdout from failed run", output.stdout.len());
            error!("{} exited unsuccessfully (code {:?})", self.tool_name(), output.code);
            return Err(SubhuntError::ChildProcessFailure {
                tool: self.tool_name(),
                code: output.code,
            });
        }

        debug!("Captured {} bytes from {}", output.stdout.len(), self.tool_name());
        Ok(RawOutput::from_bytes(&output.stdout))
    }

    fn tool_name(&self) -> String {
        self.executable.display().to_string()
    }

    fn classify_error(&self, err: io::Error) -> SubhuntError {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                SubhuntError::ExecutableNotFound {
                    path: self.executable.clone(),
                    reason: err.to_string(),
                }
            }
            io::ErrorKind::TimedOut if self.timeout.is_some() => SubhuntError::Timeout {
                tool: self.tool_name(),
                seconds: self.timeout.map(|t| t.as_secs()).unwrap_or_default(),
            },
            _ => SubhuntError::Execution {
                tool: self.tool_name(),
                message: err.to_string(),
            },
        }
    }
}
