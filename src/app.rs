// src/app.rs - Wires configuration, the tool invoker and the reporter together
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use tracing::{info, debug};

use crate::config::Config;
use crate::core::{Invoker, SubdomainList};
use crate::error::{SubhuntResult, SubhuntError};
use crate::reporting::{EnumerationReport, ReportFormat, Reporter, extension_to_format};
use crate::utils::shell::{ProcessRunner, TokioProcessRunner};

/// Per-run overrides, typically from the command line. `None` falls back to
/// the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct EnumerateOptions {
    pub domain: String,
    pub executable: Option<PathBuf>,
    pub timeout_seconds: Option<u64>,
    pub format: Option<ReportFormat>,
    pub header: Option<String>,
    pub output: Option<PathBuf>,
}

/// Settings a single run actually uses
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub executable: PathBuf,
    pub timeout: Option<Duration>,
    pub format: ReportFormat,
    pub header: String,
}

/// Main application struct
pub struct App {
    config: Config,
    runner: Arc<dyn ProcessRunner>,
}

impl App {
    /// Create an application that runs the tool as a real child process
    pub fn new(config: Config) -> Self {
        Self::with_runner(config, Arc::new(TokioProcessRunner::new()))
    }

    pub fn with_runner(config: Config, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Merge command-line overrides over the configuration
    pub fn resolve(&self, options: &EnumerateOptions) -> RunSettings {
        let format = options.format
            .or_else(|| {
                options.output.as_deref()
                    .and_then(Path::extension)
                    .and_then(|ext| extension_to_format(&ext.to_string_lossy()))
            })
            .unwrap_or(self.config.output.format);

        RunSettings {
            executable: options.executable.clone()
                .unwrap_or_else(|| self.config.tool.executable.clone()),
            timeout: options.timeout_seconds
                .or(self.config.tool.timeout_seconds)
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            format,
            header: options.header.clone()
                .unwrap_or_else(|| self.config.output.header.clone()),
        }
    }

    /// Run the tool against `domain` and collect what it reports
    pub async fn enumerate(&self, domain: &str, settings: &RunSettings) -> SubhuntResult<EnumerationReport> {
        if domain.is_empty() {
            return Err(SubhuntError::InvalidInput("Domain must not be empty".to_string()));
        }

        let invoker = Invoker::new(settings.executable.clone(), Arc::clone(&self.runner))
            .with_timeout(settings.timeout);

        let started_at = Utc::now();
        let raw = invoker.invoke(domain).await?;
        let finished_at = Utc::now();

        let subdomains = SubdomainList::from_raw(&raw);
        info!("Found {} subdomains for {}", subdomains.len(), domain);

        Ok(EnumerationReport::new(domain, invoker.executable(), subdomains, started_at, finished_at))
    }

    /// Enumerate and render the result into `out`. Nothing is written when
    /// the tool fails.
    pub async fn enumerate_into(
        &self,
        options: &EnumerateOptions,
        out: &mut dyn Write,
    ) -> SubhuntResult<EnumerationReport> {
        let settings = self.resolve(options);
        debug!("Run settings: {:?}", settings);

        let report = self.enumerate(&options.domain, &settings).await?;
        Reporter::new(settings.format, settings.header).report(&report, out)?;

        Ok(report)
    }

    /// Enumerate and print to stdout, or to the output file when one is set
    pub async fn run(&self, options: &EnumerateOptions) -> SubhuntResult<EnumerationReport> {
        let mut buffer = Vec::new();
        let report = self.enumerate_into(options, &mut buffer).await?;

        match &options.output {
            Some(path) => {
                write_output(path, &buffer).await?;
                info!("Report written to {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&buffer)?;
                stdout.flush()?;
            }
        }

        Ok(report)
    }
}

async fn write_output(path: &Path, contents: &[u8]) -> SubhuntResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await
            .map_err(|e| SubhuntError::FileError {
                path: parent.to_path_buf(),
                message: format!("Failed to create directory: {}", e),
            })?;
    }

    tokio::fs::write(path, contents).await
        .map_err(|e| SubhuntError::FileError {
            path: path.to_path_buf(),
            message: format!("Failed to write report: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use crate::utils::shell::{MockProcessRunner, ProcessOutput};

    fn runner_returning(success: bool, code: i32, stdout: &'static [u8]) -> Arc<dyn ProcessRunner> {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().returning(move |_, _, _| Ok(ProcessOutput {
            success,
            code: Some(code),
            stdout: stdout.to_vec(),
            stderr: Vec::new(),
        }));
        Arc::new(runner)
    }

    fn options(domain: &str) -> EnumerateOptions {
        EnumerateOptions {
            domain: domain.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_prints_header_and_subdomains() {
        let app = App::with_runner(Config::default(), runner_returning(true, 0, b"a.example.com\nb.example.com\n"));

        let mut out = Vec::new();
        let report = app.enumerate_into(&options("example.com"), &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Subdomains found:\na.example.com\nb.example.com\n");
        assert_eq!(report.total, 2);
        assert_eq!(report.tool, "./subfinder");
    }

    #[tokio::test]
    async fn test_missing_executable_prints_nothing() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().returning(|_, _, _| Err(io::Error::from(io::ErrorKind::NotFound)));
        let app = App::with_runner(Config::default(), Arc::new(runner));

        let mut out = Vec::new();
        let err = app.enumerate_into(&options("example.com"), &mut out).await.unwrap_err();

        assert!(matches!(err, SubhuntError::ExecutableNotFound { .. }));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_failed_tool_prints_nothing() {
        let app = App::with_runner(Config::default(), runner_returning(false, 1, b"partial.example.com\n"));

        let mut out = Vec::new();
        let err = app.enumerate_into(&options("example.com"), &mut out).await.unwrap_err();

        assert!(matches!(err, SubhuntError::ChildProcessFailure { code: Some(1), .. }));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_empty_domain_rejected_before_running() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().never();
        let app = App::with_runner(Config::default(), Arc::new(runner));

        let mut out = Vec::new();
        let err = app.enumerate_into(&options(""), &mut out).await.unwrap_err();

        assert!(matches!(err, SubhuntError::InvalidInput(_)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_cli_overrides_reach_runner() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run()
            .withf(|program, args, timeout| {
                program == Path::new("/opt/tools/subfinder")
                    && args == ["-d".to_string(), "example.org".to_string()]
                    && *timeout == Some(Duration::from_secs(5))
            })
            .times(1)
            .returning(|_, _, _| Ok(ProcessOutput {
                success: true,
                code: Some(0),
                stdout: b"www.example.org\n".to_vec(),
                stderr: Vec::new(),
            }));
        let app = App::with_runner(Config::default(), Arc::new(runner));

        let opts = EnumerateOptions {
            domain: "example.org".to_string(),
            executable: Some(PathBuf::from("/opt/tools/subfinder")),
            timeout_seconds: Some(5),
            header: Some("Results:".to_string()),
            ..Default::default()
        };

        let mut out = Vec::new();
        app.enumerate_into(&opts, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Results:\nwww.example.org\n");
    }

    #[test]
    fn test_resolve_precedence() {
        let mut config = Config::default();
        config.tool.timeout_seconds = Some(60);
        config.output.format = ReportFormat::Text;
        let app = App::with_runner(config, Arc::new(MockProcessRunner::new()));

        let defaults = app.resolve(&options("example.com"));
        assert_eq!(defaults.executable, PathBuf::from("./subfinder"));
        assert_eq!(defaults.timeout, Some(Duration::from_secs(60)));
        assert_eq!(defaults.format, ReportFormat::Text);

        let by_extension = app.resolve(&EnumerateOptions {
            output: Some(PathBuf::from("out/results.json")),
            ..options("example.com")
        });
        assert_eq!(by_extension.format, ReportFormat::Json);

        let explicit = app.resolve(&EnumerateOptions {
            output: Some(PathBuf::from("out/results.json")),
            format: Some(ReportFormat::Text),
            timeout_seconds: Some(0),
            ..options("example.com")
        });
        assert_eq!(explicit.format, ReportFormat::Text);
        assert_eq!(explicit.timeout, None);
    }

    #[tokio::test]
    async fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/example.json");
        let app = App::with_runner(Config::default(), runner_returning(true, 0, b"a.example.com\n"));

        app.run(&EnumerateOptions {
            output: Some(path.clone()),
            ..options("example.com")
        }).await.unwrap();

        let written: EnumerationReport = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written.domain, "example.com");
        assert_eq!(written.subdomains.as_slice(), ["a.example.com".to_string()]);
    }
}
